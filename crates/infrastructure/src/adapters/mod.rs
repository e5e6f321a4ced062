//! Infrastructure adapters

mod process_env;
mod reqwest_client;

pub use process_env::{DOTENV_FILE, DotenvError, ProcessEnvironment};
pub use reqwest_client::ReqwestDeploymentClient;

//! funcflow-core
//!
//! Cloud Function雛形の生成と、生成直後のデプロイ記述子パイプラインを提供します。

pub mod descriptor;
pub mod envfile;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod scaffold;
pub mod secrets;
pub mod snowflake;

pub use descriptor::{DeployTarget, Descriptor};
pub use error::*;
pub use options::{GenerateOptions, is_affirmative};
pub use secrets::{SecretAccessor, SecretRef};

pub mod context;
pub mod lifecycle;

pub use lifecycle::{run_once, RunOptions};

pub async fn run(options: RunOptions) -> anyhow::Result<()> {
    run_once(options).await.map(|_| ())
}

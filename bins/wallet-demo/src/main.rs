//! Spark wallet demo front-end.
//!
//! Boots a wallet session against the in-process collaborator, requests a
//! demonstration invoice, and prints the page whenever the view changes:
//! the loading indicator first, then the balance and invoice once the
//! wallet is live.
//!
//! # Configuration
//!
//! Set `SPARK_DEMO_DIR` to choose where the wallet mnemonic is persisted.
//! Defaults to `.spark-demo` in the working directory; delete the
//! directory to start over with a fresh wallet.
//!
//! ```bash
//! RUST_LOG=info cargo run --release -p wallet-demo
//! ```

use secret_store::FileSecretStore;
use session::Session;
use spark_client::LocalSpark;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATA_DIR: &str = ".spark-demo";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("wallet-demo starting");

    let data_dir =
        std::env::var("SPARK_DEMO_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_owned());
    tracing::info!(%data_dir, "persisting wallet secret under data directory");

    // -----------------------------------------------------------------------
    // Session setup
    // -----------------------------------------------------------------------

    let session = Session::new(LocalSpark::new(), FileSecretStore::new(&data_dir));
    let mut view = session.subscribe();
    println!("{}", view.borrow_and_update().render());

    let runner = session.clone();
    tokio::spawn(async move { runner.run().await });

    // -----------------------------------------------------------------------
    // Render loop
    // -----------------------------------------------------------------------

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received ctrl-c, shutting down");
                break;
            }
            changed = view.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}", view.borrow_and_update().render());
            }
        }
    }

    session.shutdown().await;
    tracing::info!("wallet-demo stopped");
}

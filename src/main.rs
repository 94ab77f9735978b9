use tower_lsp::Server;
use wordlsp::{create_service, init_logging};

#[tokio::main]
async fn main() {
    init_logging();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_service();
    Server::new(stdin, stdout, socket).serve(service).await;
}

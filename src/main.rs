use coffee_machine::config::MachineConfig;
use coffee_machine::dispatcher::Dispatcher;
use coffee_machine::lifecycle::{setup_tracing, CoffeeSystem};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = MachineConfig::default();
    info!(?config, "Starting coffee machine");

    let system = CoffeeSystem::new(&config);

    let mut dispatcher = Dispatcher::new(
        system.machine_client.clone(),
        BufReader::new(stdin()),
        stdout(),
    );
    let outcome = dispatcher.run().await;
    // The dispatcher holds a client clone; release it so the actor can stop.
    drop(dispatcher);

    let last = system.shutdown().await?;
    info!(money = last.money, "Machine stopped");

    outcome.map_err(|e| {
        error!(error = %e, "Dispatcher failed");
        e.to_string()
    })
}

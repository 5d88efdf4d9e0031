use coffee_machine::config::MachineConfig;
use coffee_machine::lifecycle::CoffeeSystem;
use coffee_machine::machine_actor::MachineError;
use coffee_machine::model::{CoffeeType, Inventory, Supplies, Supply};

/// Full end-to-end test against the real machine actor.
#[tokio::test]
async fn test_full_machine_integration() {
    let system = CoffeeSystem::new(&MachineConfig::default());
    let client = &system.machine_client;

    // Brew an espresso
    let state = client.buy(CoffeeType::Espresso).await.expect("Failed to buy");
    assert_eq!(state, Inventory::new(150, 540, 104, 8, 554));

    // A latte needs 350 ml of water; only 150 left
    let err = client.buy(CoffeeType::Latte).await.unwrap_err();
    assert_eq!(
        err,
        MachineError::NotEnoughIngredients { supply: Supply::Water, servings: 0 }
    );

    // Refused purchase changed nothing
    let snapshot = client.snapshot().await.expect("Failed to get state");
    assert_eq!(snapshot, state);

    // Restock and retry
    client
        .fill(Supplies { water: 1000, milk: 0, beans: 0, cups: 0 })
        .await
        .expect("Failed to fill");
    let state = client.buy(CoffeeType::Latte).await.expect("Failed to buy");
    assert_eq!(state, Inventory::new(800, 465, 84, 7, 561));

    // Empty the till
    assert_eq!(client.take().await.unwrap(), 561);
    assert_eq!(client.take().await.unwrap(), 0);

    // Remaining is read-only
    let a = client.snapshot().await.unwrap();
    let b = client.snapshot().await.unwrap();
    assert_eq!(a, b);

    let last = system.shutdown().await.expect("Failed to shutdown");
    assert_eq!(last, Inventory::new(800, 465, 84, 7, 0));
}

/// Purchases from many tasks are serialized by the actor: stock never goes negative.
#[tokio::test]
async fn test_concurrent_purchases_never_oversell() {
    let config = MachineConfig::with_initial(Inventory::new(2500, 0, 1000, 100, 0));
    let system = CoffeeSystem::new(&config);

    let mut handles = vec![];
    for _ in 0..20 {
        let client = system.machine_client.clone();
        handles.push(tokio::spawn(async move { client.buy(CoffeeType::Espresso).await }));
    }

    let mut successful = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successful += 1;
        }
    }

    // 2500 ml of water covers exactly ten espressos
    assert_eq!(successful, 10);

    let last = system.shutdown().await.unwrap();
    assert_eq!(last, Inventory::new(0, 0, 840, 90, 40));
}

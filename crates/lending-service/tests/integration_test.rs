use lending_core::{
    LendingConfig, MemberCreate, ReservationStatus, ReserveError, ResourceCreate,
};
use lending_service::{LendingSystem, ServiceError};

#[tokio::test]
async fn test_exclusive_and_pooled_through_client() {
    let system = LendingSystem::new(&LendingConfig::default()).unwrap();
    let client = system.client.clone();

    let h1 = client.register_holder(MemberCreate::regular("H1")).await.unwrap();
    let h2 = client.register_holder(MemberCreate::regular("H2")).await.unwrap();
    let h3 = client.register_holder(MemberCreate::regular("H3")).await.unwrap();
    let r1 = client
        .add_resource(ResourceCreate::physical("Design Patterns", "Gang of Four"))
        .await
        .unwrap();
    let r2 = client
        .add_resource(ResourceCreate::pooled("Clean Code", "Robert Martin", 2))
        .await
        .unwrap();

    client.reserve(h1, r1).await.unwrap();
    assert_eq!(
        client.reserve(h2, r1).await,
        Err(ServiceError::Reserve(ReserveError::ResourceUnavailable(r1)))
    );

    client.reserve(h1, r2).await.unwrap();
    assert!(client.resource(r2).await.unwrap().unwrap().available);
    client.reserve(h2, r2).await.unwrap();
    assert!(!client.resource(r2).await.unwrap().unwrap().available);
    assert_eq!(
        client.reserve(h3, r2).await,
        Err(ServiceError::Reserve(ReserveError::ResourceUnavailable(r2)))
    );

    let reservations = client.reservations().await.unwrap();
    assert_eq!(reservations.len(), 3);
    assert!(reservations
        .iter()
        .all(|r| r.status == ReservationStatus::Active));

    let inventory = client.inventory_summary().await.unwrap();
    assert_eq!(inventory.total, 2);
    assert_eq!(inventory.reserved, 2);

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_reservations_respect_license_count() {
    let system = LendingSystem::new(&LendingConfig::default()).unwrap();
    let licenses = 3;
    let book = system
        .client
        .add_resource(ResourceCreate::pooled("Clean Code", "Robert Martin", licenses))
        .await
        .unwrap();

    let mut holders = Vec::new();
    for i in 0..10 {
        let id = system
            .client
            .register_holder(MemberCreate::regular(format!("Holder {i}")))
            .await
            .unwrap();
        holders.push(id);
    }

    let tasks: Vec<_> = holders
        .into_iter()
        .map(|holder| {
            let client = system.client.clone();
            tokio::spawn(async move { client.reserve(holder, book).await })
        })
        .collect();

    let mut granted = 0;
    let mut refused = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => granted += 1,
            Err(ServiceError::Reserve(ReserveError::ResourceUnavailable(id))) => {
                assert_eq!(id, book);
                refused += 1;
            }
            Err(other) => panic!("Unexpected error: {other}"),
        }
    }

    assert_eq!(granted, licenses);
    assert_eq!(refused, 7);
    assert_eq!(system.client.usage_summary().await.unwrap().active, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_closing_returns_license_to_pool() {
    let system = LendingSystem::new(&LendingConfig::default()).unwrap();
    let client = &system.client;
    let joao = client
        .register_holder(MemberCreate::regular("João Silva"))
        .await
        .unwrap();
    let maria = client
        .register_holder(MemberCreate::regular("Maria Santos"))
        .await
        .unwrap();
    let ebook = client
        .add_resource(ResourceCreate::pooled("Refactoring", "Martin Fowler", 1))
        .await
        .unwrap();

    let reservation = client.reserve(joao, ebook).await.unwrap();
    assert!(client.reserve(maria, ebook).await.is_err());

    let closed = client.close(reservation.id).await.unwrap();
    assert_eq!(closed.status, ReservationStatus::Closed);
    assert!(client.reserve(maria, ebook).await.is_ok());

    let usage = client.usage_summary().await.unwrap();
    assert_eq!((usage.total, usage.active, usage.closed), (2, 1, 1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_regular_holder_limit_and_administrator_bypass() {
    let system = LendingSystem::new(&LendingConfig::default()).unwrap();
    let client = &system.client;
    let regular = client
        .register_holder(MemberCreate::regular("Maria Santos").with_limit(1))
        .await
        .unwrap();
    let admin = client
        .register_holder(MemberCreate::administrator("Ana Admin").with_limit(1))
        .await
        .unwrap();
    let ebook = client
        .add_resource(ResourceCreate::pooled("Clean Code", "Robert Martin", 10))
        .await
        .unwrap();

    client.reserve(regular, ebook).await.unwrap();
    assert_eq!(
        client.reserve(regular, ebook).await,
        Err(ServiceError::Reserve(ReserveError::HolderIneligible(regular)))
    );

    client.reserve(admin, ebook).await.unwrap();
    client.reserve(admin, ebook).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_results_are_served_from_cache() {
    let system = LendingSystem::new(&LendingConfig::default()).unwrap();
    let client = &system.client;
    let holder = client
        .register_holder(MemberCreate::regular("João Silva"))
        .await
        .unwrap();
    let book = client
        .add_resource(ResourceCreate::physical("Java: Como Programar", "Paul Deitel"))
        .await
        .unwrap();

    let before = client.search("JAVA", None).await.unwrap();
    assert_eq!(before.len(), 1);
    assert!(before[0].available);

    client.reserve(holder, book).await.unwrap();

    // Same query, same cached snapshot.
    let cached = client.search("java", Some("  ")).await.unwrap();
    assert_eq!(cached, before);

    // A fresh query sees the reservation.
    let fresh = client.search("java", Some("deitel")).await.unwrap();
    assert!(!fresh[0].available);

    system.shutdown().await.unwrap();
}

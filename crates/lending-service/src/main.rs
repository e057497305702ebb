//! Demo run: seeds a small library, searches it twice, makes a handful of
//! reservations (some refused) and prints the summaries.
//!
//! ```bash
//! RUST_LOG=info cargo run -p lending-service
//! ```

use lending_core::{LendingConfig, MemberCreate, ResourceCreate};
use lending_service::{setup_tracing, LendingSystem};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = LendingConfig::from_env()?;
    info!(?config, "Starting lending system");
    let system = LendingSystem::new(&config)?;
    let client = &system.client;

    let span = tracing::info_span!("seeding");
    let (joao, maria, ana, java, clean_code, patterns) = async {
        info!("Registering holders and resources");
        let joao = client
            .register_holder(MemberCreate::regular("João Silva").with_email("joao@email.com"))
            .await?;
        let maria = client
            .register_holder(MemberCreate::regular("Maria Santos").with_email("maria@email.com"))
            .await?;
        let ana = client
            .register_holder(MemberCreate::administrator("Ana Admin"))
            .await?;

        let java = client
            .add_resource(
                ResourceCreate::physical("Java: Como Programar", "Paul Deitel")
                    .with_isbn("978-85-7522-123-4")
                    .with_category("Programação")
                    .with_location("Estante A1"),
            )
            .await?;
        let clean_code = client
            .add_resource(
                ResourceCreate::pooled("Clean Code", "Robert Martin", 3)
                    .with_isbn("978-85-7522-456-7")
                    .with_category("Programação"),
            )
            .await?;
        let patterns = client
            .add_resource(ResourceCreate::physical("Design Patterns", "Gang of Four"))
            .await?;

        Ok::<_, lending_service::ServiceError>((joao, maria, ana, java, clean_code, patterns))
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("search");
    async {
        // The second call is answered from the cache.
        for _ in 0..2 {
            let results = client.search("java", None).await?;
            for view in &results {
                info!(id = %view.id, title = %view.title, detail = %view.reservation_detail, "Found");
            }
        }
        Ok::<_, lending_service::ServiceError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("reservations");
    async {
        let attempts = [
            (joao, java),
            (maria, java),
            (joao, clean_code),
            (maria, clean_code),
            (ana, clean_code),
            (maria, patterns),
        ];
        for (holder_id, resource_id) in attempts {
            match client.reserve(holder_id, resource_id).await {
                Ok(reservation) => info!(
                    reservation_id = %reservation.id,
                    %holder_id,
                    %resource_id,
                    expires_at = %reservation.expires_at.format("%Y-%m-%d"),
                    "Reservation confirmed"
                ),
                Err(e) => warn!(%holder_id, %resource_id, error = %e, "Reservation refused"),
            }
        }
    }
    .instrument(span)
    .await;

    let usage = client.usage_summary().await?;
    let inventory = client.inventory_summary().await?;
    info!(
        total = usage.total,
        active = usage.active,
        closed = usage.closed,
        "Usage summary"
    );
    info!(
        total = inventory.total,
        physical = inventory.physical,
        digital = inventory.digital,
        available = inventory.available,
        reserved = inventory.reserved,
        "Inventory summary"
    );

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

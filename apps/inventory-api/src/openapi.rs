//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Inventory management API with restock tracking",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/product", api = domain_products::ProductApiDoc),
        (path = "/restock", api = domain_products::RestockApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Restock", description = "Restock status and override endpoints")
    )
)]
pub struct ApiDoc;

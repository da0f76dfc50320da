use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Product Catalog API";

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of `GET /`.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

impl Welcome {
    pub fn new(version: &'static str) -> Self {
        Self {
            message: WELCOME_MESSAGE,
            version,
            endpoints: &[
                "GET /api/products",
                "GET /api/products/search?q=",
                "GET /api/products/stats",
                "GET /api/products/:id",
                "POST /api/products",
                "PUT /api/products/:id",
                "DELETE /api/products/:id",
            ],
        }
    }
}

//! Advisor prompt.
//!
//! Every question is sent on its own together with a compact JSON dump of the
//! catalog; no earlier turns are included.

use minijinja::{Environment, context};
use motodb_core::catalog::{CatalogStore, Product, Specs};
use serde::Serialize;

use crate::error::GatewayError;

const TEMPLATE_NAME: &str = "advisor";

const ADVISOR_TEMPLATE: &str = r#"You are a product expert for KYMCO motorcycles and scooters, helping a customer choose a model.

Current model lineup (JSON):
{{ catalog }}

Customer question: {{ question }}

Requirements:
1. When recommending a model, give your reasons and compare it with the alternatives.
2. Keep a professional and warm tone.
3. Focus on performance, intended use (commuting, touring, retro styling) and price.
4. Quote specification values exactly as listed above."#;

/// The fields of a product the advisor sees.
#[derive(Serialize)]
struct ProductBrief<'a> {
    name: &'a str,
    price: &'a str,
    category: &'static str,
    specs: &'a Specs,
    desc: &'a str,
}

impl<'a> From<&'a Product> for ProductBrief<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            price: &product.price,
            category: product.category.label(),
            specs: &product.specs,
            desc: &product.description,
        }
    }
}

/// Renders advisor prompts for one catalog.
pub struct AdvisorPrompt {
    env: Environment<'static>,
    catalog_json: String,
}

impl AdvisorPrompt {
    pub fn new(catalog: &CatalogStore) -> Result<Self, GatewayError> {
        let briefs: Vec<ProductBrief<'_>> = catalog.iter().map(ProductBrief::from).collect();
        let catalog_json = serde_json::to_string(&briefs)?;

        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, ADVISOR_TEMPLATE)?;

        Ok(Self { env, catalog_json })
    }

    pub fn render(&self, question: &str) -> Result<String, GatewayError> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(context! {
            catalog => self.catalog_json.as_str(),
            question => question,
        })?)
    }
}

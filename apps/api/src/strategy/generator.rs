//! Strategy generation pipeline.
//!
//! Flow: catalog lookup → prompt assembly → one external text-generation
//! call. The returned text is opaque: no parsing, no validation, no schema.
//! Any failure along the way degrades to a marker-prefixed display string —
//! the caller always gets something to render.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{self, ProductRecord};
use crate::currency;
use crate::llm_client::TextGenerator;
use crate::strategy::prompts::{FAILURE_MARKER, NO_PRODUCTS_LINE, STRATEGY_PROMPT_TEMPLATE};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Display language for the generated strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Portuguese,
    Spanish,
}

impl Language {
    /// The language name as written into the prompt directive.
    pub fn directive(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português",
            Language::Spanish => "Español",
        }
    }
}

/// One submission's inputs. Monetary amounts arrive in BRL from the form.
#[derive(Debug, Clone)]
pub struct StrategyRequest {
    pub investment_brl: f64,
    pub monthly_goal_brl: f64,
    pub skills: String,
    pub language: Language,
}

/// What one submission produced: the lookup hits and the text to render.
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub products: Vec<ProductRecord>,
    pub strategy: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt assembly
// ────────────────────────────────────────────────────────────────────────────

/// Formats the product listing block: one line per record with the
/// commission-per-sale figure the model is told to build its math on.
pub fn build_products_info(products: &[ProductRecord]) -> String {
    if products.is_empty() {
        return NO_PRODUCTS_LINE.to_string();
    }
    products
        .iter()
        .map(|p| {
            format!(
                "- {} (${}, {}% commission = ${:.2} per sale, Gravity: {})",
                p.name,
                p.price,
                p.commission_pct,
                currency::commission_per_sale(p.price, p.commission_pct),
                p.gravity
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fills the strategy template with converted figures, skills text, the
/// product listing and the language directive.
pub fn build_strategy_prompt(request: &StrategyRequest, products: &[ProductRecord]) -> String {
    STRATEGY_PROMPT_TEMPLATE
        .replace("{language}", request.language.directive())
        .replace(
            "{investment_usd}",
            &format!("{:.2}", currency::brl_to_usd(request.investment_brl)),
        )
        .replace("{investment_brl}", &format_brl(request.investment_brl))
        .replace(
            "{goal_usd}",
            &format!("{:.2}", currency::brl_to_usd(request.monthly_goal_brl)),
        )
        .replace("{goal_brl}", &format_brl(request.monthly_goal_brl))
        .replace("{skills}", request.skills.trim())
        .replace("{products_info}", &build_products_info(products))
}

// Form amounts are whole numbers (step 100 / 500); render them without cents.
fn format_brl(amount: f64) -> String {
    format!("{amount:.0}")
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one submission: lookup, prompt, external call.
///
/// Errors from the external call are caught here — this is the single catch
/// site — and rendered as a `❌ Error:`-prefixed string in place of the
/// strategy. No retry at this layer; the user may simply resubmit.
pub async fn generate_strategy(
    generator: &dyn TextGenerator,
    api_key: &str,
    request: &StrategyRequest,
) -> StrategyOutcome {
    let products = catalog::find_products(&request.skills);
    info!("Catalog lookup found {} product(s)", products.len());

    let prompt = build_strategy_prompt(request, &products);

    let strategy = match generator.generate(api_key, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Strategy generation failed: {e}");
            format!("{FAILURE_MARKER} {e}")
        }
    };

    StrategyOutcome { products, strategy }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

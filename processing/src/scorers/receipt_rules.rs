use tracing::debug;

use crate::model::{Receipt, ScorerResult};
use crate::scorers::RuleBasedScorer;
use crate::scorers::parsing::{FieldError, parse_amount, purchase_day, purchase_hour, purchase_minute};

pub const RETAILER_ALPHANUMERIC: &str = "retailer_alphanumeric";
pub const ROUND_DOLLAR_TOTAL: &str = "round_dollar_total";
pub const QUARTER_MULTIPLE_TOTAL: &str = "quarter_multiple_total";
pub const ITEM_PAIRS: &str = "item_pairs";
pub const DESCRIPTION_LENGTH_BONUS: &str = "description_length_bonus";
pub const ODD_PURCHASE_DAY: &str = "odd_purchase_day";
pub const AFTERNOON_PURCHASE: &str = "afternoon_purchase";

/// The reward-points rule set for receipts.
pub fn get_receipt_scorer() -> RuleBasedScorer<Receipt> {
    let mut scorer = RuleBasedScorer::<Receipt>::new();

    scorer.add_rule(retailer_alphanumeric);
    scorer.add_rule(round_dollar_total);
    scorer.add_rule(quarter_multiple_total);
    scorer.add_rule(item_pairs);
    scorer.add_rule(description_length_bonus);
    scorer.add_rule(odd_purchase_day);
    scorer.add_rule(afternoon_purchase);

    scorer
}

fn triggered(name: &str, score: i64) -> Option<ScorerResult> {
    (score != 0).then(|| ScorerResult::new(name, score))
}

// Malformed values count as zero; scoring never aborts on one field.
fn or_zero<V: Default>(parsed: Result<V, FieldError>, field: &str, raw: &str) -> V {
    parsed.unwrap_or_else(|error| {
        debug!(field, raw, %error, "Unparsable receipt field, scoring it as zero");
        V::default()
    })
}

fn total_amount(receipt: &Receipt) -> f64 {
    or_zero(parse_amount(&receipt.total), "total", &receipt.total)
}

/// One point per ASCII letter or digit in the retailer name.
fn retailer_alphanumeric(receipt: &Receipt) -> Option<ScorerResult> {
    let count = receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count();
    triggered(RETAILER_ALPHANUMERIC, count as i64)
}

fn round_dollar_total(receipt: &Receipt) -> Option<ScorerResult> {
    let total = total_amount(receipt);
    triggered(ROUND_DOLLAR_TOTAL, if total.fract() == 0.0 { 50 } else { 0 })
}

// Cents are truncated toward zero, not rounded.
fn quarter_multiple_total(receipt: &Receipt) -> Option<ScorerResult> {
    let cents = (total_amount(receipt) * 100.0) as i64;
    triggered(QUARTER_MULTIPLE_TOTAL, if cents % 25 == 0 { 25 } else { 0 })
}

/// Five points for every completed pair of items.
fn item_pairs(receipt: &Receipt) -> Option<ScorerResult> {
    let pairs = (receipt.items.len() / 2) as i64;
    triggered(ITEM_PAIRS, pairs * 5)
}

fn description_length_bonus(receipt: &Receipt) -> Option<ScorerResult> {
    let bonus = receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .map(|item| {
            let price = or_zero(parse_amount(&item.price), "price", &item.price);
            (price * 0.2).ceil() as i64
        })
        .sum();
    triggered(DESCRIPTION_LENGTH_BONUS, bonus)
}

fn odd_purchase_day(receipt: &Receipt) -> Option<ScorerResult> {
    let day = or_zero(
        purchase_day(&receipt.purchase_date),
        "purchaseDate",
        &receipt.purchase_date,
    );
    triggered(ODD_PURCHASE_DAY, if day % 2 != 0 { 6 } else { 0 })
}

/// Strictly after 14:00 and strictly before 16:00.
fn afternoon_purchase(receipt: &Receipt) -> Option<ScorerResult> {
    let time = &receipt.purchase_time;
    let hour = or_zero(purchase_hour(time), "purchaseTime.hour", time);
    let minute = or_zero(purchase_minute(time), "purchaseTime.minute", time);
    let score = match (hour, minute) {
        (14, minute) if minute > 0 => 10,
        (15, _) => 10,
        _ => 0,
    };
    triggered(AFTERNOON_PURCHASE, score)
}

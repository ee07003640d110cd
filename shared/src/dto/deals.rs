/// One item of a shopping-deals search.
///
/// The controller never inspects result items; it only hands the whole set
/// from the deals screen to the shopping-list screen, so items stay untyped JSON.
pub type SearchItem = serde_json::Value;

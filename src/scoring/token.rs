/// How a posted score was recorded. GHIN tags scores with a trailing
/// suffix; imputed rounds ("Ai") are statistical estimates of rounds that
/// were never actually played and must not feed real averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentType {
    Adjusted,
    Combined,
    Home,
    Imputed,
    Unknown,
}

/// Result of normalizing a raw score token like "82A" or "79H".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedScore {
    pub value: Option<u32>,
    pub adjustment: AdjustmentType,
}

impl NormalizedScore {
    /// Whether this score may enter numeric aggregates.
    pub fn countable(&self) -> bool {
        self.value.is_some() && self.adjustment != AdjustmentType::Imputed
    }
}

/// Normalize a raw score token: the leading digit run becomes the numeric
/// score, the trailing suffix (matched whole, case-insensitively) becomes
/// the adjustment tag. A token with no leading digits has no numeric score.
pub fn parse_token(raw: Option<&str>) -> NormalizedScore {
    let Some(raw) = raw else {
        return NormalizedScore {
            value: None,
            adjustment: AdjustmentType::Unknown,
        };
    };

    let token = raw.trim();
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());

    let value = token[..digits_end].parse::<u32>().ok();

    let adjustment = match token[digits_end..].trim().to_ascii_lowercase().as_str() {
        "a" => AdjustmentType::Adjusted,
        "c" => AdjustmentType::Combined,
        "h" => AdjustmentType::Home,
        "ai" => AdjustmentType::Imputed,
        _ => AdjustmentType::Unknown,
    };

    NormalizedScore { value, adjustment }
}

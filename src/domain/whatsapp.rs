/// Number the call-to-action buttons point at, in wa.me international format.
const CONTACT_NUMBER: &str = "5511981246767";

/// Pre-filled message sent when a visitor taps "Tenho Interesse" on a card.
pub fn interest_message(title: &str) -> String {
    format!("Olá! Tenho interesse no imóvel \"{title}\" que vi no site.")
}

/// wa.me deep link carrying the interest message as its single `text`
/// query parameter, percent-encoded.
pub fn interest_link(title: &str) -> String {
    format!(
        "https://wa.me/{CONTACT_NUMBER}?text={}",
        urlencoding::encode(&interest_message(title))
    )
}

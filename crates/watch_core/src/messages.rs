//! Texts sent to subscribers. Markdown unless noted otherwise.

pub const STARTED: &str = "🚀 Bot de *Nike Run Buenos Aires* iniciado.\n";
pub const SIGNUP_HEADER: &str = "🟢 *¡Nuevos cupos abiertos para Nike Run!*\n";
pub const SUBSCRIBED: &str = "✅ ¡Te has suscrito a las alertas de Nike Run!\n";
pub const NO_SLOTS: &str = "⌛ Todavía no hay cupos disponibles.\n";
pub const UNKNOWN_STATE: &str = "⚠️ Estado desconocido en la página.\n";

pub fn signup_link_line(link: &str) -> String {
    format!("👉 [Inscribite acá]({link})\n")
}

/// Header followed by one link line per discovered signup link.
pub fn signup_announcement(links: &[String]) -> String {
    let mut text = String::from(SIGNUP_HEADER);
    for link in links {
        text.push_str(&signup_link_line(link));
    }
    text
}

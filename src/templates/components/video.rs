use maud::{html, Markup};

/// Video block with native browser controls. Empty when there is no URL.
/// `muted` is only ever turned on for the condominium common-area clip.
pub fn video_player(video_url: Option<&str>, muted: bool) -> Markup {
    html! {
        @if let Some(url) = video_url {
            video src=(url) loop playsinline controls muted[muted] {}
        }
    }
}

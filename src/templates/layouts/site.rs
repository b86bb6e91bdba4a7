use maud::{html, Markup, DOCTYPE};

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                // Feature icons and the WhatsApp glyph on the cards.
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
                script src="/static/fade.js" defer {}
            }
            body {
                header class="site-header" {
                    div class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#2f6f4f"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="icon icon-tabler icon-tabler-home"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        h3 { (title) }
                    }
                    nav {
                        ul {
                            li { a href="#condo-listings-section" { "Condomínio" } }
                            li { a href="#other-listings-section" { "Outras Casas" } }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "Fale conosco pelo WhatsApp para agendar uma visita." }
                }
            }
        }
    }
}

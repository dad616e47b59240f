use common::view_model::TitleClicks;
use dioxus::prelude::*;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Logo and title. Every click on the title makes it a little longer;
/// the count lives here, so it resets when the header remounts.
#[component]
pub fn TitleLogo() -> Element {
    let mut clicks = use_signal(TitleClicks::default);
    let title = use_memo(move || clicks.read().title());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                flex-shrink: 0;
                color: #F5F6F8;
                font-size: 20px;
                font-weight: 500;
                user-select: none;
            ",
            img { src: LOGO, alt: "", style: "width: 32px; height: 32px;" }
            span {
                onclick: move |_| clicks.write().click(),
                "{title}"
            }
        }
    }
}

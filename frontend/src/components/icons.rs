use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v12H3zM16 12h2M3 7l2-3h12l2 3")
}

pub fn icon_credit_card() -> Html {
    icon_base("M2 7h20v12H2zM2 11h20")
}

pub fn icon_pencil() -> Html {
    icon_base("M4 20h4L19 9l-4-4L4 16v4z")
}

pub fn icon_trash() -> Html {
    icon_base("M4 7h16M9 7V4h6v3M6 7l1 13h10l1-13")
}

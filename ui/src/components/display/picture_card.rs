use dioxus::prelude::*;

use crate::services::picture::PictureMetadata;

#[derive(Props, PartialEq, Clone)]
pub struct PictureCardProps {
    pub picture: Option<PictureMetadata>,
    pub is_loading: bool,
}

/// Shows the fetched random picture and its metadata. A failed fetch
/// leaves the section empty; there is nothing to retry.
#[component]
pub fn PictureCard(props: PictureCardProps) -> Element {
    if props.is_loading {
        return rsx! {
            div {
                class: "picture-card loading",
                "Loading picture..."
            }
        };
    }

    match props.picture {
        Some(picture) => rsx! {
            div {
                class: "picture-card",
                img {
                    class: "picture-image",
                    src: "{picture.download_url}",
                    alt: "Random picture by {picture.author}"
                }
                div {
                    class: "picture-caption",
                    "#{picture.id} by {picture.author} ({picture.width}x{picture.height})"
                }
            }
        },
        None => rsx! {},
    }
}

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type,
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

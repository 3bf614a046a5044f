//! Central button construction helpers ensuring consistent padding and style.
use crate::ui::style::pad_nav;
use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;

pub struct Btn;
impl Btn {
    /// Primary-styled paging control.
    pub fn nav(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(pad_nav(label))
            .style(ButtonStyle::Primary)
    }
}

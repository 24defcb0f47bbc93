use serde::{Deserialize, Serialize};

use crate::{Gesture, prelude::*};

/// Which calendar page the picker body shows.
///
/// ```text
/// Day --label--> Month --label--> Year
///  ^               |  ^            |
///  +--pick month---+  +--pick year-+
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewGranularity {
    #[default]
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl ViewGranularity {
    /// View after a click on the header's month/year label
    pub const fn zoom_out(self) -> Self {
        match self {
            Self::Day => Self::Month,
            Self::Month | Self::Year => Self::Year,
        }
    }

    /// View that follows `gesture`. Gestures that do not navigate keep the view.
    pub const fn after(self, gesture: &Gesture) -> Self {
        match gesture {
            Gesture::ClickHeaderLabel => self.zoom_out(),
            Gesture::PickMonth(_) => Self::Day,
            Gesture::PickYear(_) => Self::Month,
            Gesture::SelectDate(_)
            | Gesture::NavigateMonth(_)
            | Gesture::ShowPreviousMonth
            | Gesture::ShowNextMonth
            | Gesture::SetInvalid(_)
            | Gesture::Clear => self,
        }
    }
}

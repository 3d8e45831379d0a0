#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Caption of the navbar switch: it names the language you would switch to.
    pub fn toggle_caption(self) -> &'static str {
        match self {
            Self::En => "中文",
            Self::Zh => "EN",
        }
    }

    pub fn toggle_label(self) -> String {
        match self.toggled() {
            Self::En => "Switch to English".to_string(),
            Self::Zh => "切換至中文".to_string(),
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-Hant",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LangState {
    lang: Lang,
}

impl LangState {
    pub fn lang(self) -> Lang {
        self.lang
    }

    pub fn toggle(&mut self) -> Lang {
        self.lang = self.lang.toggled();
        self.lang
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalLabels {
    pub description: &'static str,
    pub features: &'static str,
    pub role: &'static str,
    pub result: &'static str,
    pub screens: &'static str,
    pub close: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
}

impl ModalLabels {
    pub fn for_lang(lang: Lang) -> Self {
        match lang {
            Lang::En => Self {
                description: "Description",
                features: "Features",
                role: "Role",
                result: "Result",
                screens: "Screens",
                close: "Close",
                previous: "Previous slide",
                next: "Next slide",
            },
            Lang::Zh => Self {
                description: "描述",
                features: "功能",
                role: "角色",
                result: "成果",
                screens: "截圖",
                close: "關閉",
                previous: "上一張",
                next: "下一張",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        assert_eq!(Lang::default(), Lang::En);
        assert_eq!(LangState::default().lang(), Lang::En);
    }

    #[test]
    fn toggle_flips_between_both_languages() {
        let mut state = LangState::default();

        assert_eq!(state.toggle(), Lang::Zh);
        assert_eq!(state.lang(), Lang::Zh);
        assert_eq!(state.toggle(), Lang::En);
    }

    #[test]
    fn document_language_codes_are_distinct() {
        assert_eq!(Lang::En.html_lang(), "en");
        assert_eq!(Lang::Zh.html_lang(), "zh-Hant");
        assert_ne!(Lang::En.as_str(), Lang::Zh.as_str());
    }

    #[test]
    fn toggle_caption_names_the_other_language() {
        assert_eq!(Lang::En.toggle_caption(), "中文");
        assert_eq!(Lang::Zh.toggle_caption(), "EN");
    }

    #[test]
    fn modal_labels_follow_language() {
        assert_eq!(ModalLabels::for_lang(Lang::En).screens, "Screens");
        assert_eq!(ModalLabels::for_lang(Lang::Zh).result, "成果");
    }
}

/// The six fortune categories a user can request, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FortuneCategory {
    Today,
    Week,
    Month,
    Love,
    Money,
    Health,
}

impl FortuneCategory {
    pub const ALL: [FortuneCategory; 6] = [
        FortuneCategory::Today,
        FortuneCategory::Week,
        FortuneCategory::Month,
        FortuneCategory::Love,
        FortuneCategory::Money,
        FortuneCategory::Health,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Reverse lookup from the prompt label, used for guidance resolution.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Wire key used in requests and in `/api/fortune-types`.
    pub const fn key(self) -> &'static str {
        match self {
            FortuneCategory::Today => "today",
            FortuneCategory::Week => "week",
            FortuneCategory::Month => "month",
            FortuneCategory::Love => "love",
            FortuneCategory::Money => "money",
            FortuneCategory::Health => "health",
        }
    }

    /// Name used inside the prompt.
    pub const fn label(self) -> &'static str {
        match self {
            FortuneCategory::Today => "오늘의 종합운세",
            FortuneCategory::Week => "이번 주 운세",
            FortuneCategory::Month => "이번 달 운세",
            FortuneCategory::Love => "연애운",
            FortuneCategory::Money => "금전운",
            FortuneCategory::Health => "건강운",
        }
    }

    /// Name shown in the category menu. Differs from `label` only for `Today`.
    pub const fn menu_name(self) -> &'static str {
        match self {
            FortuneCategory::Today => "오늘의 운세",
            other => other.label(),
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            FortuneCategory::Today => "☀️",
            FortuneCategory::Week => "📅",
            FortuneCategory::Month => "🌙",
            FortuneCategory::Love => "💕",
            FortuneCategory::Money => "💰",
            FortuneCategory::Health => "🏥",
        }
    }

    /// What the model should cover for this category.
    pub const fn guide(self) -> &'static str {
        match self {
            FortuneCategory::Today => "하루 전체적인 에너지, 주의사항, 행운의 시간대, 추천 활동",
            FortuneCategory::Week => {
                "일주일간의 전체적 흐름, 각 요일별 포인트, 주간 목표 달성 가능성"
            }
            FortuneCategory::Month => "한 달간의 큰 흐름, 상순/중순/하순별 변화, 월간 계획 조언",
            FortuneCategory::Love => {
                "현재 연인관계 또는 솔로의 만남 가능성, 고백/프로포즈 타이밍, 이성에게 어필하는 방법"
            }
            FortuneCategory::Money => {
                "수입 증가 가능성, 투자/저축 조언, 지출 주의사항, 부업 기회, 금전 관리법"
            }
            FortuneCategory::Health => {
                "몸의 컨디션, 주의해야 할 신체 부위, 운동 추천, 음식 조언, 스트레스 관리법"
            }
        }
    }
}

/// Resolves a requested key to its prompt label. Unknown keys pass through verbatim.
pub fn resolve_label(key: &str) -> &str {
    FortuneCategory::from_key(key).map_or(key, |c| c.label())
}

/// Guidance for a resolved label, if the label names a known category.
pub fn guide_for_label(label: &str) -> Option<&'static str> {
    FortuneCategory::from_label(label).map(FortuneCategory::guide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_in_menu_order() {
        let keys: Vec<&str> = FortuneCategory::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["today", "week", "month", "love", "money", "health"]);
    }

    #[test]
    fn test_from_key_round_trips_every_variant() {
        for category in FortuneCategory::ALL {
            assert_eq!(FortuneCategory::from_key(category.key()), Some(category));
            assert_eq!(FortuneCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_from_key_is_case_sensitive() {
        assert_eq!(FortuneCategory::from_key("Today"), None);
        assert_eq!(FortuneCategory::from_key(""), None);
    }

    #[test]
    fn test_resolve_label_known_key() {
        assert_eq!(resolve_label("love"), "연애운");
        assert_eq!(resolve_label("today"), "오늘의 종합운세");
    }

    #[test]
    fn test_resolve_label_unknown_key_verbatim() {
        assert_eq!(resolve_label("career"), "career");
        assert!(guide_for_label(resolve_label("career")).is_none());
    }

    #[test]
    fn test_guide_lookup_by_label() {
        assert_eq!(
            guide_for_label("금전운"),
            Some("수입 증가 가능성, 투자/저축 조언, 지출 주의사항, 부업 기회, 금전 관리법")
        );
        // menu name for Today is not a prompt label
        assert!(guide_for_label("오늘의 운세").is_none());
    }

    #[test]
    fn test_menu_name_differs_only_for_today() {
        for category in FortuneCategory::ALL {
            if category == FortuneCategory::Today {
                assert_ne!(category.menu_name(), category.label());
            } else {
                assert_eq!(category.menu_name(), category.label());
            }
        }
    }
}

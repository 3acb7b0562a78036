//! Mã định danh và trạng thái slide của carousel.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Mã carousel riêng cho từng phần tử trên trang.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CarouselId(String);

impl CarouselId {
    /// Sinh mã mới: tiền tố + hậu tố ngẫu nhiên base-36.
    ///
    /// Mã luôn bắt đầu bằng chữ cái để `#id` là selector CSS hợp lệ.
    pub fn generate(prefix: &str) -> Self {
        let lead = if prefix.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
            ""
        } else {
            "c"
        };
        Self(format!(
            "{lead}{prefix}{}",
            to_base36(Uuid::new_v4().as_u128())
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Selector dạng `#id` dùng cho nút điều hướng.
    pub fn selector(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Hướng chuyển slide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    Prev,
    Next,
}

impl SlideDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SlideDirection::Prev => "prev",
            SlideDirection::Next => "next",
        }
    }
}

/// Trạng thái slide của một carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    id: CarouselId,
    len: usize,
    active: usize,
}

impl CarouselState {
    pub fn new(id: CarouselId, len: usize) -> Self {
        Self { id, len, active: 0 }
    }

    pub fn id(&self) -> &CarouselId {
        &self.id
    }

    /// `None` khi carousel không có slide.
    pub fn active(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    /// Chuyển slide theo nút điều hướng; bỏ qua nút trỏ tới carousel khác.
    pub fn apply(&mut self, target: &str, direction: SlideDirection) -> bool {
        if self.len == 0 || target != self.id.selector() {
            return false;
        }
        self.step(direction);
        true
    }

    fn step(&mut self, direction: SlideDirection) {
        self.active = match direction {
            SlideDirection::Next => (self.active + 1) % self.len,
            SlideDirection::Prev => (self.active + self.len - 1) % self.len,
        };
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: HashSet<CarouselId> = (0..5_000)
            .map(|_| CarouselId::generate("carousel-"))
            .collect();
        assert_eq!(ids.len(), 5_000);
    }

    #[test]
    fn generated_id_is_prefixed_base36() {
        let id = CarouselId::generate("carousel-");
        let suffix = id.as_str().strip_prefix("carousel-").expect("prefix");
        assert!(!suffix.is_empty());
        assert!(suffix
            .bytes()
            .all(|byte| byte.is_ascii_digit() || byte.is_ascii_lowercase()));
        assert_eq!(id.selector(), format!("#{id}"));
    }

    #[test]
    fn ids_start_with_a_letter_whatever_the_prefix() {
        for prefix in ["", "9-", "-x"] {
            for _ in 0..200 {
                let id = CarouselId::generate(prefix);
                assert!(
                    id.as_str().starts_with(|ch: char| ch.is_ascii_alphabetic()),
                    "{id}"
                );
                assert!(id.as_str()[1..].starts_with(prefix));
            }
        }
        assert!(CarouselId::generate("carousel-")
            .as_str()
            .starts_with("carousel-"));
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn state_wraps_in_both_directions() {
        let id = CarouselId::generate("c-");
        let target = id.selector();
        let mut state = CarouselState::new(id, 3);

        assert_eq!(state.active(), Some(0));
        assert!(state.apply(&target, SlideDirection::Prev));
        assert_eq!(state.active(), Some(2));
        state.apply(&target, SlideDirection::Next);
        state.apply(&target, SlideDirection::Next);
        assert_eq!(state.active(), Some(1));
    }

    #[test]
    fn empty_carousel_controls_are_inert() {
        let id = CarouselId::generate("c-");
        let target = id.selector();
        let mut state = CarouselState::new(id, 0);

        assert!(!state.apply(&target, SlideDirection::Next));
        assert_eq!(state.active(), None);
    }

    #[test]
    fn controls_for_another_carousel_are_ignored() {
        let mut first = CarouselState::new(CarouselId::generate("c-"), 2);
        let mut second = CarouselState::new(CarouselId::generate("c-"), 2);
        let first_target = first.id().selector();

        assert!(!second.apply(&first_target, SlideDirection::Next));
        assert_eq!(second.active(), Some(0));
        assert!(first.apply(&first_target, SlideDirection::Next));
        assert_eq!(first.active(), Some(1));
        assert_eq!(second.active(), Some(0));
    }
}

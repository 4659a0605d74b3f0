/// Browser-facing half: DOM binding, Yew cards, animations
pub mod animations;
pub mod components;
pub mod page;

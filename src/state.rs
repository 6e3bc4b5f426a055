#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AnimatorState {
    Uninitialized, // No theme applied or no particle batch yet
    Running,       // Valid batch and active theme, stays here for good
}

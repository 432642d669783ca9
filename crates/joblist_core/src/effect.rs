/// Side effects requested by [`crate::update`]; the host runs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a transient informational notice.
    Notify { message: String },
    /// Navigate to the route made of these path segments.
    Navigate { segments: Vec<String> },
}

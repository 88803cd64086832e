use crate::game::GameState;

/// Universal interface for automated move sources. Human input goes through
/// the UI instead of an agent.
pub trait Agent {
    /// Pick a pit to sow, as a relative index in `[0, 5]` for the side to
    /// move. Only called on non-terminal states, where the side to move
    /// always has at least one seeded pit.
    fn choose(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}

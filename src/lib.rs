pub mod commands;
pub mod completions;
pub mod kb;
pub mod settings;
pub mod validation;

/// ASCII art logo for slate CLI
pub const LOGO: &str = "\
      ╷
   ┌─┐│  ┌─┐┌┬┐┌─┐
   └─┐│  ├─┤ │ ├┤
   └─┘┴─┘┴ ┴ ┴ └─┘";

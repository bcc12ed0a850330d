mod window_chrome;
mod window_controls;
mod workspace_tab_button;
mod workspace_tabs;

pub use window_chrome::WindowChrome;
pub use window_controls::WindowControls;
pub use workspace_tab_button::WorkspaceTabButton;
pub use workspace_tabs::WorkspaceTabs;

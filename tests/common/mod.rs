pub mod mock_completion;
pub mod mock_notifier;
pub mod mock_editor;

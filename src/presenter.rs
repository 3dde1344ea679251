/// Callbacks the dispatcher drives on its host.
///
/// Hosts render whatever they like from these; the dispatcher never reads
/// anything back.
pub trait Presenter {
    fn set_result_count(&mut self, count: usize);
    fn set_candidate_list(&mut self, candidates: &[String]);
    fn set_resolved_command(&mut self, command: &str, argument: &str);
    fn set_plugin_label(&mut self, label: &str);
    fn show_error(&mut self, message: &str);
    fn show_success(&mut self);
    fn clear_status(&mut self);
    /// Informational output such as a generated password.
    fn show_message(&mut self, message: &str);
    /// Replace the text in the search box (autocomplete).
    fn set_search_text(&mut self, text: &str);
    fn reset_all(&mut self);
    fn hide(&mut self);
}

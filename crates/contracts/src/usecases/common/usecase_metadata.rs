/// UseCase metadata for identification and UI labelling
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "create_shipping_label")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u101_create_shipping_label"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

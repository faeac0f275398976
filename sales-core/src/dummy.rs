/// Value to forward from the dummy component's input to its output slot.
/// Empty or missing input forwards nothing.
pub fn forwarded(input: Option<&str>) -> Option<&str> {
    input.filter(|value| !value.is_empty())
}

/// Builders whose artifact id is a `region:image-id` composite.
///
/// These strings are the builder ids Packer's Amazon builders report and
/// must be kept verbatim.
pub const AMAZON_BUILDER_IDS: [&str; 4] = [
    "mitchellh.amazonebs",
    "mitchellh.amazon.ebssurrogate",
    "mitchellh.amazon.instance",
    "mitchellh.amazon.chroot",
];

/// Returns true iff `builder_id` is one of [`AMAZON_BUILDER_IDS`].
///
/// Matching is exact and case-sensitive.
pub fn is_composite_builder(builder_id: &str) -> bool {
    AMAZON_BUILDER_IDS.contains(&builder_id)
}

use bitflags::bitflags;

bitflags! {
    /// Header byte of a serialized [`FlagSetRecord`](super::flag_set_record::FlagSetRecord).
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RecordFlags: u8 {
        /// An enumeration name follows the header.
        const BOUND = 0x01;
        /// The value is stored as a `u32` instead of a `u64`.
        const COMPACT = 0x02;
    }
}

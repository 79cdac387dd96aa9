use bitflags::bitflags;

bitflags! {
    /// Flags indicating various properties of a type.
    ///
    /// These flags are computed once when a type node is allocated and cached
    /// for efficient queries. This avoids repeated recursive traversals.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TyFlags: u16 {
        /// A class type appears somewhere in this type.
        const HAS_CLASSES = 1;
        /// `mixed` or an undetermined object appears somewhere in this type.
        const HAS_UNRESOLVED = 1 << 1;
    }
}

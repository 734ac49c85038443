use std::marker::PhantomData;

use crate::{
    flag_enumeration::{Flag, FlagEnum, FlagEnumeration, Member},
    flag_set::FlagSet,
};

/// Iterator over the enabled flags of a [`FlagSet`], in enumeration order.
///
/// The iterator copies the set's raw value, so calling [`FlagSet::iter`] again
/// always starts over from the first member.
#[derive(Debug, Clone)]
pub struct Iter {
    enumeration: Option<&'static FlagEnumeration>,
    members: std::slice::Iter<'static, Member>,
    value: u64,
}

impl Iter {
    pub(crate) fn new(enumeration: Option<&'static FlagEnumeration>, value: u64) -> Self {
        let members: &'static [Member] = match enumeration {
            Some(enumeration) => enumeration.members(),
            None => &[],
        };
        Self {
            enumeration,
            members: members.iter(),
            value,
        }
    }
}

impl Iterator for Iter {
    type Item = Flag;

    fn next(&mut self) -> Option<Self::Item> {
        let enumeration = self.enumeration?;
        let value = self.value;
        self.members
            .by_ref()
            .find(|member| value & member.bits != 0)
            .map(|member| Flag::from_parts(enumeration, member.name, member.bits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.members.len()))
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = Flag;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the enabled flags of a [`FlagSet`] as typed members.
#[derive(Debug, Clone)]
pub struct Members<E> {
    flags: Iter,
    _marker: PhantomData<E>,
}

impl<E: FlagEnum> Members<E> {
    pub(crate) fn new(flags: Iter) -> Self {
        Self {
            flags,
            _marker: PhantomData,
        }
    }
}

impl<E: FlagEnum> Iterator for Members<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.flags.by_ref().find_map(|flag| E::from_bits(flag.bits()))
    }
}

use super::{bitwidth::NumericRange, ChoiceKey, SettingInfo, Value, ValueType};

/// How a shared setting is laid out in the settings string. A serializer packs
/// every value as a fixed-width index of [`bitwidth`](Self::bitwidth) bits.
///
/// Settings with choices are encoded as the position of the chosen key. List
/// settings are encoded as a sequence of such indices, one per added or removed
/// option, each sequence ended by one of the two
/// [`list_terminators`](Self::list_terminators). Settings with only a numeric
/// range are encoded as their offset from the minimum.
#[derive(Debug, Copy, Clone)]
pub struct EncodingLayout<'a> {
    info: &'a SettingInfo,
}

impl SettingInfo {
    /// Returns how the setting is encoded into the settings string, or [`None`]
    /// if it isn't shared or has nothing to encode.
    pub fn encoding(&self) -> Option<EncodingLayout<'_>> {
        (self.is_shared() && self.bitwidth() > 0).then_some(EncodingLayout { info: self })
    }
}

impl<'a> EncodingLayout<'a> {
    /// The name of the setting.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.info.name()
    }

    /// The type of the setting's value.
    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.info.value_type()
    }

    /// The number of bits every index occupies.
    #[inline]
    pub fn bitwidth(&self) -> u32 {
        self.info.bitwidth()
    }

    /// The keys in the order of their indices.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &'a ChoiceKey> + 'a {
        self.info.choices().keys()
    }

    /// The range values are offset against, if the setting is encoded by range
    /// instead of by choices.
    #[inline]
    pub fn range(&self) -> Option<NumericRange> {
        if self.info.choices().is_empty() {
            self.info.gui().params.range
        } else {
            None
        }
    }

    /// Returns the index a value is encoded as. For list settings this is the
    /// index of a single element. Returns [`None`] if the value is neither a
    /// choice nor within the range.
    pub fn index_of(&self, value: &Value) -> Option<u32> {
        if let Some(range) = self.range() {
            let value = value.get_i64()?;
            if value < range.min || value > range.max {
                return None;
            }
            return u32::try_from(value.abs_diff(range.min)).ok();
        }
        let key = ChoiceKey::from_value(value)?;
        let position = self.info.choices().position(&key)?;
        u32::try_from(position).ok()
    }

    /// Returns the value an index decodes to. Returns [`None`] for indices
    /// that don't correspond to a value, including the list terminators.
    pub fn value_at(&self, index: u32) -> Option<Value> {
        if let Some(range) = self.range() {
            let value = range.min.checked_add(index.into())?;
            return (value <= range.max).then_some(Value::I64(value));
        }
        let key = self.info.choices().get_index(usize::try_from(index).ok()?)?;
        Some(key.into())
    }

    /// For list settings, the indices ending the list of added options and
    /// the list of removed options, in that order. They directly follow the
    /// indices of the choices.
    pub fn list_terminators(&self) -> Option<(u32, u32)> {
        if self.value_type() != ValueType::List {
            return None;
        }
        let count = u32::try_from(self.info.choices().len()).ok()?;
        Some((count, count + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::super::gui;
    use super::*;

    #[test]
    fn unshared_settings_are_not_encoded() {
        let info = gui::combobox("logic", "Logic", ["a", "b"], "a").build().unwrap();
        assert!(info.encoding().is_none());
        let info = gui::combobox("logic", "Logic", ["a"], "a").shared().build().unwrap();
        assert!(info.encoding().is_none());
    }

    #[test]
    fn choices_encode_by_position() {
        let info = gui::combobox("bridge", "Bridge", ["open", "vanilla", "stones"], "vanilla")
            .shared()
            .build()
            .unwrap();
        let layout = info.encoding().unwrap();
        assert_eq!(layout.bitwidth(), 2);
        assert_eq!(layout.index_of(&Value::from("stones")), Some(2));
        assert_eq!(layout.index_of(&Value::from("medallions")), None);
        assert_eq!(layout.value_at(1), Some(Value::from("vanilla")));
        assert_eq!(layout.value_at(3), None);
        assert_eq!(layout.list_terminators(), None);
    }

    #[test]
    fn range_encodes_by_offset() {
        let info = gui::numberinput("hearts", "Hearts", 3, Some(-2), Some(13))
            .shared()
            .build()
            .unwrap();
        let layout = info.encoding().unwrap();
        assert_eq!(layout.bitwidth(), 4);
        assert_eq!(layout.index_of(&Value::I64(-2)), Some(0));
        assert_eq!(layout.index_of(&Value::I64(13)), Some(15));
        assert_eq!(layout.index_of(&Value::I64(14)), None);
        assert_eq!(layout.value_at(5), Some(Value::I64(3)));
        assert_eq!(layout.value_at(16), None);
    }

    #[test]
    fn list_terminators_follow_choices() {
        let info = gui::search_box("items", "Items", ["bow", "hookshot", "lens"], Vec::<Value>::new())
            .shared()
            .build()
            .unwrap();
        let layout = info.encoding().unwrap();
        assert_eq!(layout.bitwidth(), 3);
        assert_eq!(layout.list_terminators(), Some((3, 4)));
        assert_eq!(layout.index_of(&Value::from("lens")), Some(2));
        assert_eq!(layout.value_at(3), None);
    }
}

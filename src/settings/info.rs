use heck::ToTitleCase;

use crate::Error;

use super::{
    bitwidth::{compute_bitwidth, NumericRange},
    coerce, ChoiceKey, ChoiceSet, Condition, Container, Dependency, DisableMap, DisableOption,
    DisableTargets, FromValue, GuiInfo, Value, ValueType, WidgetKind,
};

bitflags::bitflags! {
    /// Describes how a setting takes part in encoding and logging.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SettingFlags: u8 {
        /// The setting is encoded into the shared settings string.
        const SHARED = 1 << 0;
        /// The setting only affects presentation and is listed in the
        /// cosmetics log.
        const COSMETIC = 1 << 1;
    }
}

/// Describes a single setting: the type of its value, its defaults, how it is
/// presented and how many bits it occupies when encoded.
///
/// A descriptor is schema, not storage. Values are read from and written to a
/// [`Container`] that is passed in explicitly, and are coerced into the
/// setting's [`ValueType`] on every access.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingInfo {
    name: String,
    value_type: ValueType,
    flags: SettingFlags,
    choices: ChoiceSet,
    default: Value,
    disabled_default: Value,
    bitwidth: u32,
    gui: GuiInfo,
    disable: DisableMap,
    dependency: Dependency,
}

impl SettingInfo {
    /// Starts describing a setting with the given name and value type.
    #[inline]
    pub fn builder(name: &str, value_type: ValueType) -> SettingBuilder {
        SettingBuilder::new(name, value_type)
    }

    /// The unique name of the setting. This is the key its value is stored
    /// under in a [`Container`].
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type of the setting's value.
    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns [`false`] for pure presentation elements that hold no value.
    #[inline]
    pub fn is_setting(&self) -> bool {
        self.value_type != ValueType::None
    }

    #[inline]
    pub fn flags(&self) -> SettingFlags {
        self.flags
    }

    /// Whether the setting is encoded into the shared settings string.
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.flags.contains(SettingFlags::SHARED)
    }

    /// Whether the setting is listed in the cosmetics log.
    #[inline]
    pub fn is_cosmetic(&self) -> bool {
        self.flags.contains(SettingFlags::COSMETIC)
    }

    #[inline]
    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    /// The value the setting has while it is unset.
    #[inline]
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// The value the setting takes while another setting disables it.
    #[inline]
    pub fn disabled_default(&self) -> &Value {
        &self.disabled_default
    }

    /// The number of bits the setting occupies in the shared settings string.
    /// This is always 0 for settings that aren't shared.
    #[inline]
    pub fn bitwidth(&self) -> u32 {
        self.bitwidth
    }

    #[inline]
    pub fn gui(&self) -> &GuiInfo {
        &self.gui
    }

    /// The other settings this setting disables, per option.
    #[inline]
    pub fn disable(&self) -> &DisableMap {
        &self.disable
    }

    /// The conditions under which this setting is disabled.
    #[inline]
    pub fn dependency(&self) -> &Dependency {
        &self.dependency
    }

    /// Returns the value stored in the container, or the default value if
    /// there is none. Fails for descriptors that hold no value, and if the
    /// stored value can't be coerced into the setting's type.
    pub fn get<C: Container + ?Sized>(&self, container: &C) -> Result<Value, Error> {
        self.ensure_setting()?;
        match container.get_raw(&self.name) {
            Some(value) if !value.is_none() => coerce(self.value_type, value.clone()),
            _ => Ok(self.default.clone()),
        }
    }

    /// Returns the value stored in the container, or the default value, as a
    /// specific type.
    pub fn get_as<T: FromValue, C: Container + ?Sized>(&self, container: &C) -> Result<T, Error> {
        T::from_value(self.get(container)?)
    }

    /// Coerces the value into the setting's type and stores it in the
    /// container. The value is not checked against the choices.
    pub fn set<C: Container + ?Sized>(
        &self,
        container: &mut C,
        value: impl Into<Value>,
    ) -> Result<(), Error> {
        self.ensure_setting()?;
        let value = coerce(self.value_type, value.into())?;
        container.set_raw(&self.name, value);
        Ok(())
    }

    /// Removes the value stored in the container, so the setting falls back to
    /// its default. Returns the removed value. Removing a setting that isn't
    /// stored does nothing and returns [`None`].
    pub fn remove<C: Container + ?Sized>(&self, container: &mut C) -> Result<Option<Value>, Error> {
        self.ensure_setting()?;
        Ok(container.delete_raw(&self.name))
    }

    /// Disables this setting whenever `on` has the expected value, or, if
    /// `negate` is set, whenever it doesn't. Conditions accumulate: the
    /// setting is disabled as soon as any of them holds.
    ///
    /// The expected value is coerced into the type of `on`. This can't detect
    /// cycles spanning multiple settings; use
    /// [`Registry::create_dependency`](super::Registry::create_dependency) for
    /// registered settings.
    pub fn create_dependency(
        &mut self,
        on: &SettingInfo,
        expected: impl Into<Value>,
        negate: bool,
    ) -> Result<(), Error> {
        if on.name == self.name {
            return Err(Error::CyclicDependency {
                path: vec![self.name.clone(), self.name.clone()],
            });
        }
        let condition = Condition::new(on, expected, negate)?;
        self.dependency.push(condition);
        Ok(())
    }

    pub(super) fn push_condition(&mut self, condition: Condition) {
        self.dependency.push(condition);
    }

    fn ensure_setting(&self) -> Result<(), Error> {
        if self.is_setting() {
            Ok(())
        } else {
            Err(Error::InvalidAccess {
                name: self.name.clone(),
            })
        }
    }
}

/// Builds a [`SettingInfo`]. The widget constructors in
/// [`gui`](super::gui) return builders that are preconfigured for the widget.
///
/// Defaults are coerced into the setting's type when building. A setting
/// without an explicit label is labeled with its name in title case.
#[derive(Debug, Clone)]
#[must_use]
pub struct SettingBuilder {
    name: String,
    value_type: ValueType,
    flags: SettingFlags,
    choices: ChoiceSet,
    default: Option<Value>,
    disabled_default: Option<Value>,
    disable: DisableMap,
    text: Option<String>,
    tooltip: String,
    widget: Option<WidgetKind>,
    range: Option<NumericRange>,
    distribution: Option<Vec<(Value, u32)>>,
    extra: super::Map,
}

impl SettingBuilder {
    /// Starts describing a setting with the given name and value type.
    pub fn new(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_owned(),
            value_type,
            flags: SettingFlags::empty(),
            choices: ChoiceSet::empty(),
            default: None,
            disabled_default: None,
            disable: DisableMap::new(),
            text: None,
            tooltip: String::new(),
            widget: None,
            range: None,
            distribution: None,
            extra: super::Map::new(),
        }
    }

    /// Sets the label of the setting.
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_owned());
        self
    }

    /// Sets the tooltip of the setting.
    pub fn tooltip(mut self, tooltip: &str) -> Self {
        self.tooltip = tooltip.to_owned();
        self
    }

    /// Sets the widget the setting is displayed with.
    pub fn widget(mut self, widget: WidgetKind) -> Self {
        self.widget = Some(widget);
        self
    }

    /// Encodes the setting into the shared settings string.
    pub fn shared(mut self) -> Self {
        self.flags |= SettingFlags::SHARED;
        self
    }

    /// Lists the setting in the cosmetics log.
    pub fn cosmetic(mut self) -> Self {
        self.flags |= SettingFlags::COSMETIC;
        self
    }

    /// Sets the choices, each labeled with its own textual form.
    pub fn choices<K: Into<ChoiceKey>>(self, keys: impl IntoIterator<Item = K>) -> Self {
        self.choice_set(ChoiceSet::from_keys(keys))
    }

    /// Sets the choices with explicit labels.
    pub fn labeled_choices<K: Into<ChoiceKey>, L: Into<String>>(
        self,
        choices: impl IntoIterator<Item = (K, L)>,
    ) -> Self {
        self.choice_set(ChoiceSet::from_labeled(choices))
    }

    /// Sets the choices.
    pub fn choice_set(mut self, choices: ChoiceSet) -> Self {
        self.choices = choices;
        self
    }

    /// Sets the value the setting has while it is unset.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the value the setting takes while it is disabled. Defaults to the
    /// default value.
    pub fn disabled_default(mut self, value: impl Into<Value>) -> Self {
        self.disabled_default = Some(value.into());
        self
    }

    /// Disables the targets whenever this setting matches the option.
    pub fn disable(mut self, option: DisableOption, targets: DisableTargets) -> Self {
        self.disable.insert(option, targets);
        self
    }

    /// Sets an additional GUI parameter.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// Sets the numeric range. Without choices, the range determines the
    /// bitwidth.
    pub fn range(mut self, range: NumericRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets the weighted options a random value is picked from. Without this,
    /// every choice gets a weight of 1.
    pub fn distribution(mut self, distribution: Vec<(Value, u32)>) -> Self {
        self.distribution = Some(distribution);
        self
    }

    /// Builds the descriptor. Fails if a default can't be coerced into the
    /// setting's type.
    pub fn build(self) -> Result<SettingInfo, Error> {
        let value_type = self.value_type;
        let mut flags = self.flags;
        if value_type == ValueType::None {
            flags.remove(SettingFlags::SHARED);
        }

        let default = match self.default {
            Some(value) if !value.is_none() => coerce(value_type, value)?,
            _ => value_type.default_value(),
        };
        let disabled_default = match self.disabled_default {
            Some(value) if !value.is_none() => coerce(value_type, value)?,
            _ => default.clone(),
        };

        let bitwidth = if flags.contains(SettingFlags::SHARED) {
            compute_bitwidth(value_type, &self.choices, self.range)
        } else {
            0
        };

        let distribution = match self.distribution {
            Some(distribution) => distribution,
            None if self.widget == Some(WidgetKind::MultipleSelect)
                && self.extra.contains_key("randomize_key") =>
            {
                self.choices.powerset_distribution()
            }
            None => self.choices.uniform_distribution(),
        };

        let text = self.text.unwrap_or_else(|| self.name.to_title_case());

        Ok(SettingInfo {
            name: self.name,
            value_type,
            flags,
            choices: self.choices,
            default,
            disabled_default,
            bitwidth,
            gui: GuiInfo {
                text,
                tooltip: self.tooltip,
                widget: self.widget,
                params: super::GuiParams {
                    range: self.range,
                    distribution,
                    extra: self.extra,
                },
            },
            disable: self.disable,
            dependency: Dependency::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::{gui, Map};
    use super::*;

    #[test]
    fn bool_defaults_and_truthy_set() {
        let info = gui::checkbutton("open_forest", "Open Forest").build().unwrap();
        let mut map = Map::new();
        assert_eq!(info.get(&map).unwrap(), Value::Bool(false));
        info.set(&mut map, 1).unwrap();
        assert_eq!(info.get(&map).unwrap(), Value::Bool(true));
        assert_eq!(map.get("open_forest"), Some(&Value::Bool(true)));
    }

    #[test]
    fn stored_values_are_coerced_on_read() {
        let info = SettingInfo::builder("count", ValueType::Integer).build().unwrap();
        let mut map = Map::new();
        map.insert("count", "12");
        assert_eq!(info.get_as::<i64, _>(&map).unwrap(), 12);

        map.insert("count", "twelve");
        assert!(matches!(info.get(&map), Err(Error::TypeConversion { .. })));

        map.insert("count", Value::None);
        assert_eq!(info.get(&map).unwrap(), Value::I64(0));
    }

    #[test]
    fn set_does_not_validate_choices() {
        let info = gui::combobox("logic", "Logic", ["glitchless", "none"], "glitchless")
            .build()
            .unwrap();
        let mut map = Map::new();
        info.set(&mut map, "anything").unwrap();
        assert_eq!(info.get(&map).unwrap(), Value::from("anything"));
    }

    #[test]
    fn remove_falls_back_to_default() {
        let info = gui::combobox("logic", "Logic", ["glitchless", "none"], "glitchless")
            .build()
            .unwrap();
        let mut map = Map::new();
        info.set(&mut map, "none").unwrap();
        assert_eq!(info.remove(&mut map).unwrap(), Some(Value::from("none")));
        assert_eq!(info.get(&map).unwrap(), Value::from("glitchless"));
        assert_eq!(info.remove(&mut map).unwrap(), None);
    }

    #[test]
    fn none_type_rejects_access() {
        let info = gui::button("generate", "Generate!").shared().build().unwrap();
        let mut map = Map::new();
        assert!(!info.is_setting());
        assert!(!info.is_shared());
        assert_eq!(info.bitwidth(), 0);
        let expected = Error::InvalidAccess {
            name: "generate".into(),
        };
        assert_eq!(info.get(&map).unwrap_err(), expected);
        assert_eq!(info.set(&mut map, true).unwrap_err(), expected);
        assert_eq!(info.remove(&mut map).unwrap_err(), expected);
    }

    #[test]
    fn defaults_are_coerced() {
        let info = SettingInfo::builder("level", ValueType::Integer)
            .default("4")
            .build()
            .unwrap();
        assert_eq!(info.default_value(), &Value::I64(4));
        assert_eq!(info.disabled_default(), &Value::I64(4));

        let info = SettingInfo::builder("level", ValueType::Integer)
            .default(4)
            .disabled_default(true)
            .build()
            .unwrap();
        assert_eq!(info.disabled_default(), &Value::I64(1));

        let err = SettingInfo::builder("level", ValueType::Integer)
            .default("four")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::TypeConversion { .. }));
    }

    #[test]
    fn unshared_settings_have_no_bitwidth() {
        let info = gui::combobox("logic", "Logic", ["a", "b", "c", "d", "e"], "a")
            .build()
            .unwrap();
        assert_eq!(info.bitwidth(), 0);
        let info = gui::combobox("logic", "Logic", ["a", "b", "c", "d", "e"], "a")
            .shared()
            .build()
            .unwrap();
        assert_eq!(info.bitwidth(), 3);
    }

    #[test]
    fn list_bitwidth_and_default() {
        let info = gui::multiple_select("tricks", "Tricks", ["a", "b", "c", "d", "e"], Vec::<Value>::new())
            .shared()
            .build()
            .unwrap();
        assert_eq!(info.bitwidth(), 3);
        assert_eq!(info.default_value(), &Value::from(Vec::<Value>::new()));
    }

    #[test]
    fn label_falls_back_to_title_case_name() {
        let info = SettingInfo::builder("starting_age", ValueType::String).build().unwrap();
        assert_eq!(info.gui().text, "Starting Age");
    }

    #[test]
    fn distribution_is_always_present() {
        let info = gui::combobox("logic", "Logic", ["a", "b"], "a").build().unwrap();
        assert_eq!(
            info.gui().params.distribution(),
            [(Value::from("a"), 1), (Value::from("b"), 1)]
        );

        let info = gui::combobox("logic", "Logic", ["a", "b"], "a")
            .distribution(vec![(Value::from("b"), 5)])
            .build()
            .unwrap();
        assert_eq!(info.gui().params.distribution(), [(Value::from("b"), 5)]);

        let info = gui::multiple_select("tricks", "Tricks", ["a", "b"], Vec::<Value>::new())
            .param("randomize_key", "randomize_tricks")
            .build()
            .unwrap();
        assert_eq!(info.gui().params.distribution().len(), 4);
    }

    #[test]
    fn self_dependency_is_rejected() {
        let mut info = gui::checkbutton("a", "A").build().unwrap();
        let copy = info.clone();
        assert!(matches!(
            info.create_dependency(&copy, true, false),
            Err(Error::CyclicDependency { .. })
        ));
    }
}

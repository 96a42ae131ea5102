use std::collections::HashSet;

use indexmap::IndexMap;

use crate::Error;

use super::{Condition, Container, SettingInfo, Value};

/// The schema of an application's settings. Every [`SettingInfo`] is
/// registered once during startup, after which dependencies between settings
/// are wired up. Once assembled, the registry is only read from and can be
/// shared freely.
///
/// Settings keep the order they were registered in. The registry also knows
/// how settings are grouped into sections and tabs, which disable maps can
/// refer to.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    settings: IndexMap<String, SettingInfo>,
    sections: IndexMap<String, Vec<String>>,
    tabs: IndexMap<String, Vec<String>>,
}

impl Registry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a setting. Fails if a setting with the same name is already
    /// registered, or if the dependencies the setting brings along form a
    /// cycle with the registered settings.
    pub fn register(&mut self, info: SettingInfo) -> Result<(), Error> {
        let name = info.name().to_owned();
        if self.settings.contains_key(&name) {
            return Err(Error::DuplicateSetting { name });
        }
        tracing::debug!(
            name = %name,
            shared = info.is_shared(),
            bitwidth = info.bitwidth(),
            "registering setting"
        );
        self.settings.insert(name.clone(), info);

        // Any cycle that appears now has to pass through the new setting.
        let cycle = self.settings[&name]
            .dependency()
            .conditions()
            .iter()
            .find_map(|condition| self.dependency_path(condition.setting(), &name));
        if let Some(path) = cycle {
            self.settings.shift_remove(&name);
            return Err(Error::CyclicDependency {
                path: Some(name).into_iter().chain(path).collect(),
            });
        }
        Ok(())
    }

    /// Returns the setting registered under the name.
    pub fn get(&self, name: &str) -> Result<&SettingInfo, Error> {
        self.settings.get(name).ok_or_else(|| Error::KeyNotFound {
            name: name.to_owned(),
        })
    }

    /// Returns [`true`] if a setting is registered under the name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.settings.contains_key(name)
    }

    /// Returns the number of registered settings.
    #[inline]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Returns [`true`] if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Returns an iterator over all settings in registration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SettingInfo> + '_ {
        self.settings.values()
    }

    /// Returns an iterator over the settings encoded into the shared settings
    /// string, in registration order.
    pub fn shared(&self) -> impl Iterator<Item = &SettingInfo> + '_ {
        self.iter().filter(|info| info.is_shared())
    }

    /// Returns an iterator over the settings listed in the cosmetics log, in
    /// registration order.
    pub fn cosmetic(&self) -> impl Iterator<Item = &SettingInfo> + '_ {
        self.iter().filter(|info| info.is_cosmetic())
    }

    /// Groups settings into a section. Disable maps can disable all of them at
    /// once by naming the section.
    pub fn add_section<S: Into<String>>(&mut self, name: &str, settings: impl IntoIterator<Item = S>) {
        self.sections
            .entry(name.to_owned())
            .or_default()
            .extend(settings.into_iter().map(Into::into));
    }

    /// Groups sections into a tab. Disable maps can disable every setting in
    /// all of its sections by naming the tab.
    pub fn add_tab<S: Into<String>>(&mut self, name: &str, sections: impl IntoIterator<Item = S>) {
        self.tabs
            .entry(name.to_owned())
            .or_default()
            .extend(sections.into_iter().map(Into::into));
    }

    /// Returns the names of the settings in the section.
    pub fn section(&self, name: &str) -> Result<&[String], Error> {
        self.sections
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::KeyNotFound {
                name: name.to_owned(),
            })
    }

    /// Returns the names of the sections in the tab.
    pub fn tab(&self, name: &str) -> Result<&[String], Error> {
        self.tabs
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::KeyNotFound {
                name: name.to_owned(),
            })
    }

    /// Disables `target` whenever `on` has the expected value, or, if `negate`
    /// is set, whenever it doesn't.
    ///
    /// Adding a condition `target` already has does nothing.
    ///
    /// Fails if either setting isn't registered, if `on` holds no value, if
    /// the expected value can't be coerced into the type of `on`, or if
    /// `target` would end up depending on itself.
    pub fn create_dependency(
        &mut self,
        target: &str,
        on: &str,
        expected: impl Into<Value>,
        negate: bool,
    ) -> Result<(), Error> {
        let condition = Condition::new(self.get(on)?, expected, negate)?;
        if self.get(target)?.dependency().conditions().contains(&condition) {
            return Ok(());
        }
        if let Some(path) = self.dependency_path(on, target) {
            return Err(Error::CyclicDependency {
                path: Some(target.to_owned()).into_iter().chain(path).collect(),
            });
        }
        tracing::debug!(
            setting = target,
            on = on,
            value = %condition.value(),
            negate,
            "wiring dependency"
        );
        if let Some(info) = self.settings.get_mut(target) {
            info.push_condition(condition);
        }
        Ok(())
    }

    /// Wires up the dependencies declared by the disable maps of every
    /// registered setting. Each option of a disable map makes its target
    /// settings, and all settings in its target sections and tabs, depend on
    /// the setting declaring it. A setting never depends on itself this way,
    /// even if it is part of a section it disables.
    ///
    /// Either every dependency is wired or, on error, none is. Wiring again
    /// adds nothing that is already wired.
    pub fn wire_disable_maps(&mut self) -> Result<(), Error> {
        let mut edges = Vec::new();
        for info in self.settings.values() {
            for (option, targets) in info.disable().iter() {
                let mut names: Vec<&str> = targets.settings.iter().map(String::as_str).collect();
                for section in &targets.sections {
                    names.extend(self.section(section)?.iter().map(String::as_str));
                }
                for tab in &targets.tabs {
                    for section in self.tab(tab)? {
                        names.extend(self.section(section)?.iter().map(String::as_str));
                    }
                }
                for target in names {
                    if target != info.name() {
                        edges.push((
                            target.to_owned(),
                            info.name().to_owned(),
                            option.value.clone(),
                            option.negate,
                        ));
                    }
                }
            }
        }

        tracing::debug!(count = edges.len(), "wiring disable maps");
        let mut wired = self.clone();
        for (target, on, value, negate) in edges {
            wired.create_dependency(&target, &on, value, negate)?;
        }
        *self = wired;
        Ok(())
    }

    /// Returns [`true`] if the setting is currently disabled by another
    /// setting.
    pub fn is_disabled<C: Container + ?Sized>(&self, name: &str, container: &C) -> Result<bool, Error> {
        self.get(name)?.dependency().evaluate(self, container)
    }

    /// Returns the conditions currently disabling the setting. This is empty
    /// if the setting is enabled.
    pub fn disabled_reasons<C: Container + ?Sized>(
        &self,
        name: &str,
        container: &C,
    ) -> Result<Vec<&Condition>, Error> {
        self.get(name)?.dependency().matching(self, container)
    }

    /// Returns the value the setting effectively has: its disabled default
    /// while it is disabled, otherwise its value in the container.
    pub fn effective_value<C: Container + ?Sized>(&self, name: &str, container: &C) -> Result<Value, Error> {
        let info = self.get(name)?;
        if info.dependency().evaluate(self, container)? {
            Ok(info.disabled_default().clone())
        } else {
            info.get(container)
        }
    }

    /// Stores the disabled default of every currently disabled setting into
    /// the container. Settings are visited in registration order, so settings
    /// registered later see the values written for earlier ones. Returns the
    /// names of the settings that were reset.
    pub fn apply_disabled_defaults<C: Container + ?Sized>(
        &self,
        container: &mut C,
    ) -> Result<Vec<&str>, Error> {
        let mut reset = Vec::new();
        for info in self.iter().filter(|info| info.is_setting()) {
            if info.dependency().evaluate(self, &*container)? {
                info.set(container, info.disabled_default().clone())?;
                reset.push(info.name());
            }
        }
        Ok(reset)
    }

    /// Finds a chain of dependencies leading from `from` to `to`. The path
    /// starts with `from` and ends with `to`.
    fn dependency_path(&self, from: &str, to: &str) -> Option<Vec<String>> {
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        self.walk(from, to, &mut visited, &mut path).then_some(path)
    }

    fn walk<'a>(
        &'a self,
        node: &'a str,
        to: &str,
        visited: &mut HashSet<&'a str>,
        path: &mut Vec<String>,
    ) -> bool {
        path.push(node.to_owned());
        if node == to {
            return true;
        }
        if visited.insert(node) {
            if let Some(info) = self.settings.get(node) {
                for condition in info.dependency().conditions() {
                    if self.walk(condition.setting(), to, visited, path) {
                        return true;
                    }
                }
            }
        }
        path.pop();
        false
    }
}

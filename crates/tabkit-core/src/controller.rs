//! Tab strip controller
//!
//! Owns the tab set and mediates the three external signals (pointer and
//! keyboard input, history navigation, the programmatic API) against the
//! single-active-tab invariant. Lookups by unknown identifier are silent
//! no-ops throughout; this component has no fatal error paths once
//! constructed.

use parking_lot::RwLock;
use std::sync::Arc;

use tabkit_navigation::{KeyResolution, NavKey, NavigationHistory, PageLocation};
use tabkit_tabs::{Content, ContentDescriptor, Position, Tab, TabDescriptor, TabSet};

use crate::config::Config;
use crate::event::{FadeSpec, Subscriber, TabChanged};
use crate::Result;

pub struct TabController {
    config: Config,
    tabs: Arc<RwLock<TabSet>>,
    history: Arc<RwLock<NavigationHistory>>,
    location: Arc<RwLock<PageLocation>>,
    /// Identifier of the active tab; distinct from the per-tab flags so
    /// that the first activation of a pre-marked tab still runs in full
    current: Arc<RwLock<Option<String>>>,
    /// Tab holding keyboard focus; may differ from `current` after
    /// arrow-traversal onto a disabled tab
    focused: Arc<RwLock<Option<String>>>,
    /// Pending scroll-into-view request, consumed by the embedding layer
    scroll_request: Arc<RwLock<Option<String>>>,
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
}

impl TabController {
    /// Build a controller from caller-supplied tab and content
    /// descriptors.
    ///
    /// Descriptors without an id get a position-derived one
    /// (`tab-<index>`). Duplicate identifiers are rejected. When several
    /// descriptors arrive marked active, only the first keeps the mark.
    pub fn new(
        config: Config,
        tabs: Vec<TabDescriptor>,
        contents: Vec<ContentDescriptor>,
    ) -> Result<Self> {
        let location = PageLocation::parse(&config.page_url)?;

        let mut set = TabSet::new();
        for (index, descriptor) in tabs.into_iter().enumerate() {
            let id = descriptor.id.unwrap_or_else(|| format!("tab-{}", index));
            let mut tab = Tab::new(id, descriptor.label)?;
            if descriptor.disabled {
                tab.set_enabled(false);
            }
            if descriptor.active && set.active_id().is_none() {
                tab.activate();
            }
            set.insert(tab, None, Position::End)?;
        }
        for descriptor in contents {
            let content = Content::new(descriptor.tab_id, descriptor.body)?;
            set.attach_content(content);
        }

        tracing::info!(tab_count = set.len(), "Initialized tab controller");

        Ok(Self {
            config,
            tabs: Arc::new(RwLock::new(set)),
            history: Arc::new(RwLock::new(NavigationHistory::new())),
            location: Arc::new(RwLock::new(location)),
            current: Arc::new(RwLock::new(None)),
            focused: Arc::new(RwLock::new(None)),
            scroll_request: Arc::new(RwLock::new(None)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Select the startup tab: the URL-fragment id when it names a known
    /// tab, else the tab already marked active, else the first tab.
    ///
    /// Activation runs without a history push; the resulting state is
    /// anchored as the baseline history entry instead, so the first
    /// back() after a real switch returns here.
    pub fn set_initial_active(&self) -> Option<Tab> {
        let target = {
            let set = self.tabs.read();
            let fragment = self.location.read().fragment().map(str::to_string);
            fragment
                .filter(|id| set.contains(id))
                .or_else(|| set.active_id())
                .or_else(|| set.first_id().map(str::to_string))
        }?;

        let tab = self.apply_switch(&target, false)?;

        let href = self.location.read().href();
        self.history
            .write()
            .anchor(&tab.id, &self.history_title(&tab.label), &href);

        Some(tab)
    }

    /// Programmatic switch. Unknown and already-active targets are
    /// silent no-ops; a disabled target still activates here, unlike on
    /// the user-interaction paths.
    pub fn switch_tab(&self, target_id: &str, update_history: bool) -> Option<Tab> {
        self.apply_switch(target_id, update_history)
    }

    /// Pointer path: activate a clicked tab unless it is disabled
    pub fn handle_tab_click(&self, tab_id: &str) -> Option<Tab> {
        self.activate_from_user(tab_id)
    }

    /// Replay a history entry reported by the navigation layer.
    ///
    /// Never pushes a further entry, which is what keeps back/forward
    /// from multiplying history records.
    pub fn handle_history_navigation(&self, tab_id: &str) -> Option<Tab> {
        self.apply_switch(tab_id, false)
    }

    /// Step the owned history cursor back and replay the entry
    pub fn navigate_back(&self) -> Option<Tab> {
        let tab_id = self.history.write().back().map(|entry| entry.tab.clone())?;
        self.location.write().set_fragment(&tab_id);
        self.handle_history_navigation(&tab_id)
    }

    /// Step the owned history cursor forward and replay the entry
    pub fn navigate_forward(&self) -> Option<Tab> {
        let tab_id = self
            .history
            .write()
            .forward()
            .map(|entry| entry.tab.clone())?;
        self.location.write().set_fragment(&tab_id);
        self.handle_history_navigation(&tab_id)
    }

    /// Keyboard path, invoked with the id of the tab holding focus.
    ///
    /// Arrows move with wraparound, Home/End jump to the edges,
    /// Enter/Space activate in place. Disabled tabs stay reachable by
    /// traversal; focus lands on them but activation is refused.
    pub fn handle_key_navigation(&self, current_tab_id: &str, key: NavKey) -> Option<Tab> {
        let (index, len) = {
            let set = self.tabs.read();
            (set.index_of(current_tab_id)?, set.len())
        };

        match key.resolve(index, len) {
            KeyResolution::Activate => self.activate_from_user(current_tab_id),
            KeyResolution::MoveTo(target_index) => {
                let target = {
                    let set = self.tabs.read();
                    set.id_at(target_index).map(str::to_string)
                }?;

                *self.focused.write() = Some(target.clone());
                self.activate_from_user(&target)
            }
            KeyResolution::Ignored => None,
        }
    }

    /// Append or prepend a new tab/content pair. The new tab is never
    /// auto-activated.
    pub fn add_tab(
        &self,
        id: &str,
        label: &str,
        body: impl Into<String>,
        position: Position,
    ) -> Result<Tab> {
        let tab = Tab::new(id, label)?;
        let content = Content::new(id, body)?;

        self.tabs.write().insert(tab.clone(), Some(content), position)?;

        tracing::info!(tab_id = %id, ?position, "Added tab");

        Ok(tab)
    }

    /// Remove a tab and its content panel.
    ///
    /// Removing the active tab first hands selection to the next tab in
    /// sequence, falling back to the previous one; removing the last tab
    /// leaves nothing active.
    pub fn remove_tab(&self, id: &str) -> Option<Tab> {
        let (was_current, successor) = {
            let set = self.tabs.read();
            if !set.contains(id) {
                return None;
            }
            let was_current = self.current.read().as_deref() == Some(id);
            (was_current, set.adjacent_to(id))
        };

        if was_current {
            match successor {
                Some(next) => {
                    self.apply_switch(&next, true);
                }
                None => {
                    *self.current.write() = None;
                }
            }
        }

        let removed = self.tabs.write().remove(id).map(|(tab, _)| tab);

        {
            let mut focused = self.focused.write();
            if focused.as_deref() == Some(id) {
                *focused = None;
            }
        }
        {
            let mut scroll = self.scroll_request.write();
            if scroll.as_deref() == Some(id) {
                *scroll = None;
            }
        }

        if removed.is_some() {
            tracing::info!(tab_id = %id, "Removed tab");
        }

        removed
    }

    pub fn enable_tab(&self, id: &str) {
        if let Some(tab) = self.tabs.write().get_mut(id) {
            tab.set_enabled(true);
            tracing::debug!(tab_id = %id, "Enabled tab");
        }
    }

    /// Disabling the active tab leaves it active; moving selection
    /// elsewhere first is the caller's responsibility.
    pub fn disable_tab(&self, id: &str) {
        if let Some(tab) = self.tabs.write().get_mut(id) {
            tab.set_enabled(false);
            tracing::debug!(tab_id = %id, "Disabled tab");
        }
    }

    /// Re-run initial-activation selection, for use after bulk external
    /// mutation of the location or tab set
    pub fn refresh(&self) -> Option<Tab> {
        tracing::debug!("Refreshing tab bindings");
        self.set_initial_active()
    }

    /// Complete any in-flight panel fade; the embedding layer calls this
    /// when its frame timer fires. Never awaited by switching logic.
    pub fn settle_transitions(&self) {
        self.tabs.write().settle_all();
    }

    /// Register a tab-changed subscriber
    pub fn subscribe(&self, subscriber: impl Fn(&TabChanged) + Send + Sync + 'static) {
        self.subscribers.write().push(Arc::new(subscriber));
    }

    // === Queries ===

    pub fn has_tab(&self, id: &str) -> bool {
        self.tabs.read().contains(id)
    }

    pub fn current_tab(&self) -> Option<Tab> {
        let id = self.current.read().clone()?;
        self.tabs.read().get(&id).cloned()
    }

    /// Tabs in display order
    pub fn all_tabs(&self) -> Vec<Tab> {
        self.tabs.read().ordered()
    }

    pub fn content_for(&self, id: &str) -> Option<Content> {
        self.tabs.read().content(id).cloned()
    }

    /// Tab holding keyboard focus
    pub fn focused_tab(&self) -> Option<String> {
        self.focused.read().clone()
    }

    /// Consume the pending scroll-into-view request
    pub fn take_scroll_request(&self) -> Option<String> {
        self.scroll_request.write().take()
    }

    /// Snapshot of the session history
    pub fn history(&self) -> NavigationHistory {
        self.history.read().clone()
    }

    pub fn location_href(&self) -> String {
        self.location.read().href()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Internals ===

    fn activate_from_user(&self, tab_id: &str) -> Option<Tab> {
        let enabled = self.tabs.read().get(tab_id)?.enabled;
        if !enabled {
            tracing::debug!(tab_id = %tab_id, "Ignoring user activation of disabled tab");
            return None;
        }
        self.apply_switch(tab_id, true)
    }

    fn apply_switch(&self, target_id: &str, update_history: bool) -> Option<Tab> {
        if self.current.read().as_deref() == Some(target_id) {
            return None;
        }

        let (tab, content_id, fade) = {
            let mut set = self.tabs.write();
            let tab = set.activate(target_id)?;

            let animated = !self.config.fade.is_zero();
            let mut fade = None;
            if let Some(content) = set.content_mut(target_id) {
                if let Err(error) = content.show(animated) {
                    tracing::warn!(%error, tab_id = %target_id, "Panel reveal rejected");
                } else if animated {
                    fade = Some(FadeSpec {
                        duration_ms: self.config.fade.as_millis() as u64,
                    });
                }
            }

            let content_id = set.content(target_id).map(|content| content.element_id());
            (tab, content_id, fade)
        };

        *self.current.write() = Some(tab.id.clone());

        if update_history {
            let href = {
                let mut location = self.location.write();
                location.set_fragment(&tab.id);
                location.href()
            };
            self.history
                .write()
                .push(&tab.id, &self.history_title(&tab.label), &href);
        }

        let event = TabChanged {
            tab_id: tab.id.clone(),
            label: tab.label.clone(),
            content_id,
            fade,
        };
        for subscriber in self.subscribers.read().iter() {
            subscriber(&event);
        }

        *self.focused.write() = Some(tab.id.clone());
        *self.scroll_request.write() = Some(tab.id.clone());

        tracing::info!(tab_id = %tab.id, update_history, "Switched tab");

        Some(tab)
    }

    fn history_title(&self, label: &str) -> String {
        let label = label.trim();
        if label.is_empty() {
            self.config.history_title_prefix.clone()
        } else {
            format!("{} - {}", self.config.history_title_prefix, label)
        }
    }
}

impl Clone for TabController {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            tabs: Arc::clone(&self.tabs),
            history: Arc::clone(&self.history),
            location: Arc::clone(&self.location),
            current: Arc::clone(&self.current),
            focused: Arc::clone(&self.focused),
            scroll_request: Arc::clone(&self.scroll_request),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::time::Duration;
    use tabkit_tabs::PanelState;

    fn settings_tabs() -> (Vec<TabDescriptor>, Vec<ContentDescriptor>) {
        let tabs = vec![
            TabDescriptor::new("Profile").with_id("profile"),
            TabDescriptor::new("Security").with_id("security"),
            TabDescriptor::new("Billing").with_id("billing"),
        ];
        let contents = vec![
            ContentDescriptor::new("profile", "<p>profile</p>"),
            ContentDescriptor::new("security", "<p>security</p>"),
            ContentDescriptor::new("billing", "<p>billing</p>"),
        ];
        (tabs, contents)
    }

    fn settings_controller() -> TabController {
        let (tabs, contents) = settings_tabs();
        TabController::new(
            Config::new("https://app.example.com/settings"),
            tabs,
            contents,
        )
        .unwrap()
    }

    fn active_ids(controller: &TabController) -> Vec<String> {
        controller
            .all_tabs()
            .into_iter()
            .filter(|tab| tab.active)
            .map(|tab| tab.id)
            .collect()
    }

    #[test]
    fn test_initial_active_defaults_to_first() {
        let controller = settings_controller();

        let tab = controller.set_initial_active().unwrap();
        assert_eq!(tab.id, "profile");
        assert_eq!(controller.current_tab().unwrap().id, "profile");

        // Initial activation anchors a baseline entry, it never pushes
        assert_eq!(controller.history().len(), 1);
        assert!(!controller.history().can_go_back());
    }

    #[test]
    fn test_initial_active_prefers_fragment() {
        let (tabs, contents) = settings_tabs();
        let controller = TabController::new(
            Config::new("https://app.example.com/settings#security"),
            tabs,
            contents,
        )
        .unwrap();

        let tab = controller.set_initial_active().unwrap();
        assert_eq!(tab.id, "security");
    }

    #[test]
    fn test_initial_active_falls_back_to_marked_tab() {
        let tabs = vec![
            TabDescriptor::new("Profile").with_id("profile"),
            TabDescriptor::new("Security").with_id("security").marked_active(),
        ];
        let controller = TabController::new(
            Config::new("https://app.example.com/settings#missing"),
            tabs,
            Vec::new(),
        )
        .unwrap();

        let tab = controller.set_initial_active().unwrap();
        assert_eq!(tab.id, "security");
    }

    #[test]
    fn test_position_derived_ids() {
        let tabs = vec![TabDescriptor::new("First"), TabDescriptor::new("Second")];
        let controller =
            TabController::new(Config::default(), tabs, Vec::new()).unwrap();

        let ids: Vec<String> = controller.all_tabs().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["tab-0", "tab-1"]);
    }

    #[test]
    fn test_at_most_one_active_across_switches() {
        let controller = settings_controller();
        controller.set_initial_active();

        for target in ["billing", "security", "profile", "billing"] {
            controller.switch_tab(target, true);
            assert_eq!(active_ids(&controller), vec![target.to_string()]);
        }
    }

    #[test]
    fn test_switch_to_active_tab_is_noop() {
        let controller = settings_controller();
        controller.set_initial_active();
        controller.switch_tab("billing", true);

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        controller.subscribe(move |event: &TabChanged| sink.lock().push(event.clone()));

        let before = controller.history().len();
        assert!(controller.switch_tab("billing", true).is_none());

        assert_eq!(controller.history().len(), before);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_switch_to_unknown_tab_is_noop() {
        let controller = settings_controller();
        controller.set_initial_active();

        assert!(controller.switch_tab("missing", true).is_none());
        assert_eq!(controller.current_tab().unwrap().id, "profile");
    }

    #[test]
    fn test_switch_pushes_history_entry() {
        let controller = settings_controller();
        controller.set_initial_active();

        controller.switch_tab("billing", true);

        let history = controller.history();
        let entry = history.current().unwrap();
        assert_eq!(entry.tab, "billing");
        assert_eq!(entry.title, "Settings - Billing");
        assert_eq!(entry.url, "https://app.example.com/settings#billing");
        assert_eq!(controller.location_href(), entry.url);
    }

    #[test]
    fn test_switch_without_history_pushes_nothing() {
        let controller = settings_controller();
        controller.set_initial_active();
        let before = controller.history().len();

        controller.switch_tab("billing", false);

        assert_eq!(controller.history().len(), before);
        assert_eq!(controller.current_tab().unwrap().id, "billing");
    }

    #[test]
    fn test_history_round_trip() {
        let controller = settings_controller();
        controller.set_initial_active();
        controller.switch_tab("billing", true);
        assert_eq!(controller.history().len(), 2);

        let tab = controller.navigate_back().unwrap();
        assert_eq!(tab.id, "profile");
        assert_eq!(controller.current_tab().unwrap().id, "profile");
        // Replaying never pushes
        assert_eq!(controller.history().len(), 2);

        let tab = controller.navigate_forward().unwrap();
        assert_eq!(tab.id, "billing");
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn test_keyboard_wraparound() {
        let controller = settings_controller();
        controller.set_initial_active();

        // Previous from the first tab wraps to the last
        let tab = controller
            .handle_key_navigation("profile", NavKey::ArrowLeft)
            .unwrap();
        assert_eq!(tab.id, "billing");

        // Next from the last tab wraps to the first
        let tab = controller
            .handle_key_navigation("billing", NavKey::ArrowRight)
            .unwrap();
        assert_eq!(tab.id, "profile");
    }

    #[test]
    fn test_keyboard_home_end_enter() {
        let controller = settings_controller();
        controller.set_initial_active();

        let tab = controller
            .handle_key_navigation("profile", NavKey::End)
            .unwrap();
        assert_eq!(tab.id, "billing");

        let tab = controller
            .handle_key_navigation("billing", NavKey::Home)
            .unwrap();
        assert_eq!(tab.id, "profile");

        // Enter on an inactive focused tab activates it in place
        controller.switch_tab("billing", true);
        let tab = controller
            .handle_key_navigation("security", NavKey::Enter)
            .unwrap();
        assert_eq!(tab.id, "security");
    }

    #[test]
    fn test_disabled_tab_focused_but_not_activated() {
        let controller = settings_controller();
        controller.set_initial_active();
        controller.disable_tab("security");

        // Traversal does not skip the disabled tab: focus lands on it
        let result = controller.handle_key_navigation("profile", NavKey::ArrowRight);
        assert!(result.is_none());
        assert_eq!(controller.focused_tab().as_deref(), Some("security"));
        assert_eq!(controller.current_tab().unwrap().id, "profile");

        // Clicks are refused too
        assert!(controller.handle_tab_click("security").is_none());

        // The programmatic path still activates it
        let tab = controller.switch_tab("security", false).unwrap();
        assert_eq!(tab.id, "security");
    }

    #[test]
    fn test_disabling_active_tab_keeps_it_active() {
        let controller = settings_controller();
        controller.set_initial_active();

        controller.disable_tab("profile");
        assert_eq!(controller.current_tab().unwrap().id, "profile");
        assert!(!controller.current_tab().unwrap().enabled);

        controller.enable_tab("profile");
        assert!(controller.current_tab().unwrap().enabled);
    }

    #[test]
    fn test_add_tab_rejects_duplicate() {
        let controller = settings_controller();

        let err = controller
            .add_tab("profile", "Profile again", "", Position::End)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::CoreError::Tab(tabkit_tabs::TabError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_add_tab_positions_without_activating() {
        let controller = settings_controller();
        controller.set_initial_active();

        controller
            .add_tab("advanced", "Advanced", "<p>advanced</p>", Position::Start)
            .unwrap();
        controller
            .add_tab("labs", "Labs", "<p>labs</p>", Position::End)
            .unwrap();

        let ids: Vec<String> = controller.all_tabs().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["advanced", "profile", "security", "billing", "labs"]);
        assert_eq!(controller.current_tab().unwrap().id, "profile");
    }

    #[test]
    fn test_remove_active_tab_activates_adjacent() {
        let controller = settings_controller();
        controller.set_initial_active();
        controller.switch_tab("security", true);

        // Next in sequence takes over
        controller.remove_tab("security");
        assert_eq!(controller.current_tab().unwrap().id, "billing");

        // No next tab left: the previous one takes over
        controller.remove_tab("billing");
        assert_eq!(controller.current_tab().unwrap().id, "profile");

        // Removing the last tab leaves nothing active
        controller.remove_tab("profile");
        assert!(controller.current_tab().is_none());
        assert!(controller.all_tabs().is_empty());
    }

    #[test]
    fn test_remove_inactive_tab_keeps_selection() {
        let controller = settings_controller();
        controller.set_initial_active();

        controller.remove_tab("billing");
        assert_eq!(controller.current_tab().unwrap().id, "profile");
        assert!(!controller.has_tab("billing"));
    }

    #[test]
    fn test_panel_visibility_follows_switch() {
        let controller = settings_controller();
        controller.set_initial_active();

        controller.switch_tab("billing", true);
        assert_eq!(
            controller.content_for("billing").unwrap().state,
            PanelState::Entering
        );
        assert_eq!(
            controller.content_for("profile").unwrap().state,
            PanelState::Hidden
        );

        controller.settle_transitions();
        assert_eq!(
            controller.content_for("billing").unwrap().state,
            PanelState::Shown
        );
    }

    #[test]
    fn test_zero_fade_shows_immediately() {
        let (tabs, contents) = settings_tabs();
        let mut config = Config::new("https://app.example.com/settings");
        config.fade = Duration::ZERO;
        let controller = TabController::new(config, tabs, contents).unwrap();

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        controller.subscribe(move |event: &TabChanged| sink.lock().push(event.clone()));

        controller.set_initial_active();
        assert_eq!(
            controller.content_for("profile").unwrap().state,
            PanelState::Shown
        );
        assert!(events.lock()[0].fade.is_none());
    }

    #[test]
    fn test_event_emitted_on_every_successful_switch() {
        let controller = settings_controller();

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        controller.subscribe(move |event: &TabChanged| sink.lock().push(event.clone()));

        controller.set_initial_active();
        controller.switch_tab("billing", true);
        controller.navigate_back();

        let seen: Vec<String> = events.lock().iter().map(|e| e.tab_id.clone()).collect();
        assert_eq!(seen, vec!["profile", "billing", "profile"]);

        let last = events.lock().last().cloned().unwrap();
        assert_eq!(last.label, "Profile");
        assert_eq!(last.content_id.as_deref(), Some("content-profile"));
    }

    #[test]
    fn test_focus_and_scroll_request_track_switch() {
        let controller = settings_controller();
        controller.set_initial_active();
        controller.switch_tab("billing", true);

        assert_eq!(controller.focused_tab().as_deref(), Some("billing"));
        assert_eq!(controller.take_scroll_request().as_deref(), Some("billing"));
        // Consumed
        assert!(controller.take_scroll_request().is_none());
    }

    #[test]
    fn test_refresh_reselects_from_location() {
        let controller = settings_controller();
        controller.set_initial_active();
        controller.switch_tab("billing", true);

        // Nothing changed externally: refresh keeps the current tab
        assert!(controller.refresh().is_none());
        assert_eq!(controller.current_tab().unwrap().id, "billing");
    }

    #[test]
    fn test_empty_set_is_all_noops() {
        let controller =
            TabController::new(Config::default(), Vec::new(), Vec::new()).unwrap();

        assert!(controller.set_initial_active().is_none());
        assert!(controller.current_tab().is_none());
        assert!(controller.switch_tab("anything", true).is_none());
        assert!(controller
            .handle_key_navigation("anything", NavKey::ArrowRight)
            .is_none());
        assert!(controller.remove_tab("anything").is_none());
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_end_to_end_settings_scenario() {
        let controller = settings_controller();

        // No URL fragment: the first tab activates
        let tab = controller.set_initial_active().unwrap();
        assert_eq!(tab.id, "profile");

        // Switching deactivates "profile", activates "billing", pushes
        let tab = controller.switch_tab("billing", true).unwrap();
        assert_eq!(tab.id, "billing");
        assert_eq!(active_ids(&controller), vec!["billing".to_string()]);
        assert_eq!(controller.history().current().unwrap().tab, "billing");

        // Home while "billing" is focused activates "profile"
        let tab = controller
            .handle_key_navigation("billing", NavKey::Home)
            .unwrap();
        assert_eq!(tab.id, "profile");

        // Disabled tabs are still reached by arrow traversal, without
        // becoming active
        controller.disable_tab("security");
        assert!(controller
            .handle_key_navigation("profile", NavKey::ArrowRight)
            .is_none());
        assert_eq!(controller.focused_tab().as_deref(), Some("security"));
        assert_eq!(controller.current_tab().unwrap().id, "profile");
    }
}

//! Sidebar navigation state.
//!
//! Tracks the active section and which expandable groups are open. Nothing
//! here fetches content; the active section only decides which static panel
//! is highlighted or shown.

use std::collections::HashMap;

use crate::config::SidebarItem;

/// Section shown right after login.
pub const DEFAULT_SECTION: &str = "profile";

/// Normalizes a label into a section identifier.
///
/// Lowercases the label and replaces every run of whitespace with one `-`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_space = false;
    for c in label.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// Section identifier of an option nested under `parent`.
pub fn option_section(parent: &str, option: &str) -> String {
    format!("{}-{}", slugify(parent), slugify(option))
}

/// What a click on a top-level sidebar item did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The item is a group; its expanded flag now has this value.
    Toggled { expanded: bool },
    /// The item is a leaf; this is the new active section.
    Activated(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_section: String,
    expanded: HashMap<String, bool>,
    mobile_menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION)
    }
}

impl NavigationState {
    pub fn new(default_section: &str) -> Self {
        Self {
            active_section: default_section.to_string(),
            expanded: HashMap::new(),
            mobile_menu_open: false,
        }
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active_section == section
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded.get(group).copied().unwrap_or(false)
    }

    pub fn any_expanded(&self) -> bool {
        self.expanded.values().any(|open| *open)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Handles a click on the top-level item called `name`.
    ///
    /// Groups toggle and keep the active section. Leaves (including names not
    /// found in `items`) become active and close the mobile menu.
    pub fn select_item(&mut self, items: &[SidebarItem], name: &str) -> Selection {
        let is_group = items
            .iter()
            .find(|item| item.name == name)
            .is_some_and(SidebarItem::is_group);

        if is_group {
            let open = self.expanded.entry(name.to_string()).or_insert(false);
            *open = !*open;
            return Selection::Toggled { expanded: *open };
        }

        self.active_section = slugify(name);
        self.mobile_menu_open = false;
        Selection::Activated(self.active_section.clone())
    }

    /// Activates `option` inside the group `parent` and closes the mobile menu.
    pub fn select_option(&mut self, parent: &str, option: &str) -> &str {
        self.active_section = option_section(parent, option);
        self.mobile_menu_open = false;
        &self.active_section
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Pointer-down anywhere in the document.
    ///
    /// Returns `true` if groups were open and got collapsed.
    pub fn pointer_down(&mut self, inside_panel: bool) -> bool {
        if inside_panel || !self.any_expanded() {
            return false;
        }
        self.collapse_all();
        true
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Group and option label matching the active section, if it is a nested option.
    pub fn active_option<'a>(&self, items: &'a [SidebarItem]) -> Option<(&'a SidebarItem, &'a str)> {
        items.iter().filter(|item| item.is_group()).find_map(|item| {
            item.all_options()
                .find(|option| option_section(&item.name, option) == self.active_section)
                .map(|option| (item, option))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> Vec<SidebarItem> {
        vec![
            SidebarItem::leaf("Application"),
            SidebarItem {
                name: "Registration".to_string(),
                options: vec![
                    "Rules and Regulations".to_string(),
                    "Submit Registration".to_string(),
                ],
                follow_up: vec!["Process Status".to_string()],
            },
            SidebarItem::leaf("Student  Admin"),
            SidebarItem::leaf("E-Payments"),
        ]
    }

    // =========================================================
    // slugs
    // =========================================================

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Residence Application"), "residence-application");
        assert_eq!(slugify("Student  Admin"), "student-admin");
        assert_eq!(slugify("E-Payments"), "e-payments");
        assert_eq!(slugify("OPAC"), "opac");
        assert_eq!(slugify("a\t b"), "a-b");
    }

    #[test]
    fn test_option_section_is_prefixed_by_parent() {
        assert_eq!(
            option_section("Registration", "Add Subjects to a Registration"),
            "registration-add-subjects-to-a-registration"
        );
    }

    // =========================================================
    // selection
    // =========================================================

    #[test]
    fn test_default_section_is_profile() {
        let nav = NavigationState::default();
        assert_eq!(nav.active_section(), "profile");
        assert!(!nav.any_expanded());
    }

    #[test]
    fn test_leaf_selection_activates_slug() {
        let items = sidebar();
        let mut nav = NavigationState::default();
        let selection = nav.select_item(&items, "Student  Admin");
        assert_eq!(selection, Selection::Activated("student-admin".to_string()));
        assert!(nav.is_active("student-admin"));
    }

    #[test]
    fn test_unknown_item_is_treated_as_leaf() {
        let items = sidebar();
        let mut nav = NavigationState::default();
        nav.select_item(&items, "Medical Web");
        assert_eq!(nav.active_section(), "medical-web");
    }

    #[test]
    fn test_group_toggles_without_changing_section() {
        let items = sidebar();
        let mut nav = NavigationState::default();

        assert!(!nav.is_expanded("Registration"));
        assert_eq!(
            nav.select_item(&items, "Registration"),
            Selection::Toggled { expanded: true }
        );
        assert!(nav.is_expanded("Registration"));
        assert_eq!(nav.active_section(), "profile");

        assert_eq!(
            nav.select_item(&items, "Registration"),
            Selection::Toggled { expanded: false }
        );
        assert!(!nav.is_expanded("Registration"));
        assert_eq!(nav.active_section(), "profile");
    }

    #[test]
    fn test_select_option_sets_prefixed_section() {
        let mut nav = NavigationState::default();
        let section = nav.select_option("Registration", "Submit Registration").to_string();
        assert_eq!(section, "registration-submit-registration");
        assert!(nav.is_active(&section));
    }

    #[test]
    fn test_active_option_lookup() {
        let items = sidebar();
        let mut nav = NavigationState::default();
        assert_eq!(nav.active_option(&items), None);

        nav.select_option("Registration", "Process Status");
        let (group, label) = nav.active_option(&items).unwrap();
        assert_eq!(group.name, "Registration");
        assert_eq!(label, "Process Status");

        nav.select_item(&items, "Application");
        assert_eq!(nav.active_option(&items), None);
    }

    // =========================================================
    // outside clicks and mobile menu
    // =========================================================

    #[test]
    fn test_outside_pointer_down_collapses_all() {
        let items = sidebar();
        let mut nav = NavigationState::default();
        nav.select_item(&items, "Registration");
        assert!(nav.any_expanded());

        assert!(!nav.pointer_down(true));
        assert!(nav.is_expanded("Registration"));

        assert!(nav.pointer_down(false));
        assert!(!nav.is_expanded("Registration"));
        assert!(!nav.any_expanded());
    }

    #[test]
    fn test_outside_pointer_down_with_nothing_open() {
        let mut nav = NavigationState::default();
        assert!(!nav.pointer_down(false));
    }

    #[test]
    fn test_leaf_and_option_close_mobile_menu() {
        let items = sidebar();
        let mut nav = NavigationState::default();

        nav.toggle_mobile_menu();
        assert!(nav.mobile_menu_open());
        nav.select_item(&items, "Registration");
        assert!(nav.mobile_menu_open(), "group toggles keep the menu open");

        nav.select_option("Registration", "Rules and Regulations");
        assert!(!nav.mobile_menu_open());

        nav.toggle_mobile_menu();
        nav.select_item(&items, "E-Payments");
        assert!(!nav.mobile_menu_open());
    }
}

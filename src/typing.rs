pub const TYPE_STEP_MS: u32 = 80;
pub const DELETE_STEP_MS: u32 = 40;
pub const FULL_PAUSE_MS: u32 = 2_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingRole {
    roles: Vec<String>,
    role_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingRole {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            role_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn restart(&mut self, roles: Vec<String>) {
        *self = Self::new(roles);
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    fn current_role(&self) -> &str {
        self.roles
            .get(self.role_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn current_len(&self) -> usize {
        self.current_role().chars().count()
    }

    pub fn visible_text(&self) -> &str {
        let role = self.current_role();
        match role.char_indices().nth(self.char_index) {
            Some((byte_index, _)) => &role[..byte_index],
            None => role,
        }
    }

    /// Milliseconds to wait before the next [`tick`](Self::tick), or `None`
    /// when there is nothing to animate.
    pub fn next_delay(&self) -> Option<u32> {
        if self.roles.is_empty() {
            return None;
        }

        let delay = if !self.deleting && self.char_index == self.current_len() {
            FULL_PAUSE_MS
        } else if self.deleting && self.char_index == 0 {
            0
        } else if self.deleting {
            DELETE_STEP_MS
        } else {
            TYPE_STEP_MS
        };
        Some(delay)
    }

    pub fn tick(&mut self) {
        if self.roles.is_empty() {
            return;
        }

        if !self.deleting && self.char_index == self.current_len() {
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
        } else if self.deleting {
            self.char_index -= 1;
        } else {
            self.char_index += 1;
        }
    }
}

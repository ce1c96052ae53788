// src/classify.rs

/// Semantic roles of the main model maps, in publication order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Precipitation,
    TempMax,
    TempMin,
}

impl Role {
    /// Rule and publication order. It is also the tie-break order: a URL
    /// matching several role patterns goes to the earliest open role.
    pub const ALL: [Role; 3] = [Role::Precipitation, Role::TempMax, Role::TempMin];

    pub fn title(self) -> &'static str {
        match self {
            Role::Precipitation => "Precipitación (WRF)",
            Role::TempMax => "Temperatura Máxima (WRF)",
            Role::TempMin => "Temperatura Mínima (WRF)",
        }
    }

    fn matches(self, lower: &str) -> bool {
        match self {
            Role::Precipitation => {
                lower.contains("precip") || lower.contains("lluv") || lower.contains("rain")
            }
            Role::TempMax => {
                lower.contains("tmax")
                    || lower.contains(" max")
                    || lower.ends_with("max.png")
                    || lower.ends_with("max.jpg")
            }
            Role::TempMin => {
                lower.contains("tmin")
                    || lower.contains(" min")
                    || lower.contains("mín")
                    || lower.ends_with("min.png")
                    || lower.ends_with("min.jpg")
            }
        }
    }
}

/// Up to one URL per role. A slot, once filled, is never reassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleAssignment {
    precip: Option<String>,
    tmax: Option<String>,
    tmin: Option<String>,
}

impl RoleAssignment {
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Precipitation => self.precip.as_deref(),
            Role::TempMax => self.tmax.as_deref(),
            Role::TempMin => self.tmin.as_deref(),
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut Option<String> {
        match role {
            Role::Precipitation => &mut self.precip,
            Role::TempMax => &mut self.tmax,
            Role::TempMin => &mut self.tmin,
        }
    }

    pub fn is_empty(&self) -> bool {
        Role::ALL.iter().all(|r| self.get(*r).is_none())
    }

    pub fn is_full(&self) -> bool {
        Role::ALL.iter().all(|r| self.get(*r).is_some())
    }

    /// Assigned roles in fixed publication order, regardless of the order
    /// the slots were filled while scanning.
    pub fn entries(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        Role::ALL
            .into_iter()
            .filter_map(|r| self.get(r).map(|url| (r, url)))
    }
}

/// Single pass over the candidates. Each URL fills at most one role (the
/// earliest open role whose pattern it matches); scanning stops early once
/// all three roles are filled. A role nothing matches stays absent.
pub fn classify(urls: &[String]) -> RoleAssignment {
    let mut out = RoleAssignment::default();

    for url in urls {
        let lower = url.to_lowercase();
        for role in Role::ALL {
            if out.get(role).is_none() && role.matches(&lower) {
                *out.slot_mut(role) = Some(url.clone());
                break;
            }
        }
        if out.is_full() {
            break;
        }
    }

    out
}

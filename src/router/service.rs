use hashbrown::HashMap as FastHashMap;
use hashbrown::hash_map::Entry;
use regex::{Regex, RegexBuilder};

use super::{Captures, Route, RouteMatch, RouterError, RouterOptions, RouterResult};
use crate::capture::CaptureValue;
use crate::path::strip_query;

/// Which route, and which of its captures, a group ordinal belongs to.
#[derive(Debug, Clone, Copy)]
struct GroupOwner {
    route: usize,
    capture: usize,
}

/// Every dynamic route folded into one anchored alternation.
#[derive(Debug)]
struct DynamicTier {
    regex: Regex,
    /// `owners[ordinal - 1]`; group 0 is the whole match.
    owners: Vec<GroupOwner>,
}

impl DynamicTier {
    fn build(
        fragments: &[&str],
        owners: Vec<GroupOwner>,
        options: &RouterOptions,
    ) -> RouterResult<Self> {
        let source = format!("^/(?:{})/?$", fragments.join("|"));
        let regex = RegexBuilder::new(&source)
            .size_limit(options.regex_size_limit)
            .dfa_size_limit(options.dfa_size_limit)
            .build()
            .map_err(|err| RouterError::RegexBuild {
                error: err.to_string(),
            })?;

        debug_assert_eq!(regex.captures_len(), owners.len() + 1);
        Ok(Self { regex, owners })
    }
}

/// Matches request paths against a fixed, ordered set of named routes and
/// builds paths back from route names.
///
/// Lookup runs in two tiers. Routes without captures are found by exact
/// lookup of the query-stripped path; everything else goes through a single
/// alternation where the first declared route wins. Both tiers accept a
/// route's canonical path followed by at most one extra `/`: static paths
/// are registered as `p` and `p/`, and the alternation ends in `/?$`.
///
/// The router is immutable once built and can be shared freely across
/// threads.
#[derive(Debug)]
pub struct Router<T = ()> {
    routes: Vec<Route<T>>,
    by_name: FastHashMap<Box<str>, usize>,
    static_paths: FastHashMap<Box<str>, usize>,
    dynamic: Option<DynamicTier>,
    options: RouterOptions,
}

impl<T> Router<T> {
    pub fn new<I>(routes: I) -> RouterResult<Self>
    where
        I: IntoIterator<Item = Route<T>>,
    {
        Self::with_options(routes, RouterOptions::default())
    }

    #[tracing::instrument(level = "trace", skip(routes, options))]
    pub fn with_options<I>(routes: I, options: RouterOptions) -> RouterResult<Self>
    where
        I: IntoIterator<Item = Route<T>>,
    {
        options.validate()?;
        let routes: Vec<Route<T>> = routes.into_iter().collect();

        let mut by_name = FastHashMap::with_capacity(routes.len());
        for (index, route) in routes.iter().enumerate() {
            if route.name().is_empty() {
                return Err(RouterError::EmptyRouteName { index });
            }
            if by_name.insert(Box::<str>::from(route.name()), index).is_some() {
                return Err(RouterError::DuplicateRouteName {
                    name: route.name().to_string(),
                });
            }
        }

        let mut static_paths = FastHashMap::new();
        let mut fragments: Vec<&str> = Vec::new();
        let mut owners: Vec<GroupOwner> = Vec::new();

        for (index, route) in routes.iter().enumerate() {
            let pattern = route.pattern();
            match pattern.static_path() {
                Some(path) => {
                    register_static(&mut static_paths, path.into(), index, &routes);
                    if path != "/" {
                        let slashed = format!("{path}/").into_boxed_str();
                        register_static(&mut static_paths, slashed, index, &routes);
                    }
                }
                None => {
                    fragments.push(pattern.fragment());
                    owners.extend(
                        (0..pattern.capture_count()).map(|capture| GroupOwner {
                            route: index,
                            capture,
                        }),
                    );
                }
            }
        }

        let dynamic_routes = fragments.len();
        let dynamic = if fragments.is_empty() {
            None
        } else {
            Some(DynamicTier::build(&fragments, owners, &options)?)
        };

        tracing::debug!(
            routes = routes.len(),
            static_paths = static_paths.len(),
            dynamic_routes,
            regex_len = dynamic.as_ref().map_or(0, |tier| tier.regex.as_str().len()),
            "router built"
        );

        Ok(Self {
            routes,
            by_name,
            static_paths,
            dynamic,
            options,
        })
    }

    /// Finds the route for `path`. Anything from the first `?` on is
    /// ignored. `None` when no route matches.
    #[tracing::instrument(level = "trace", skip(self, path), fields(path = %path))]
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        let pathname = strip_query(path);
        let found = self
            .find_static(pathname)
            .or_else(|| self.find_dynamic(pathname));

        if self.options.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                path = %path,
                matched = ?found.as_ref().map(RouteMatch::name),
                "router lookup"
            );
        }
        found
    }

    fn find_static(&self, pathname: &str) -> Option<RouteMatch<'_, T>> {
        let &index = self.static_paths.get(pathname)?;
        Some(RouteMatch {
            route: &self.routes[index],
            captures: Captures::empty(),
        })
    }

    fn find_dynamic(&self, pathname: &str) -> Option<RouteMatch<'_, T>> {
        let tier = self.dynamic.as_ref()?;
        let groups = tier.regex.captures(pathname)?;

        // Exactly one alternative matched, so its groups are the only
        // defined ones and start at its first capture.
        let start = groups.iter().skip(1).position(|group| group.is_some())? + 1;
        let owner = tier.owners.get(start - 1)?;
        debug_assert_eq!(owner.capture, 0);

        let route = &self.routes[owner.route];
        let pattern = route.pattern();
        let mut captures = Captures::with_capacity(pattern.capture_count());
        for (offset, capture) in pattern.captures().enumerate() {
            let raw = groups.get(start + offset)?.as_str();
            captures.push(capture.name(), capture.kind().deserialize(raw));
        }

        Some(RouteMatch { route, captures })
    }

    /// Builds the canonical path of route `name` from capture values given
    /// in the route's capture order.
    pub fn reverse(&self, name: &str, values: &[CaptureValue]) -> RouterResult<String> {
        let route = self.route(name).ok_or_else(|| RouterError::UnknownRoute {
            name: name.to_string(),
        })?;

        route
            .pattern()
            .reverse(values)
            .map_err(|source| RouterError::Reverse {
                route: name.to_string(),
                source,
            })
    }

    pub fn route(&self, name: &str) -> Option<&Route<T>> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Source of the combined expression for dynamic routes, if any.
    pub fn dynamic_source(&self) -> Option<&str> {
        self.dynamic.as_ref().map(|tier| tier.regex.as_str())
    }
}

/// Last declaration wins; earlier routes with the same literal path are
/// only reachable through `reverse`.
fn register_static<T>(
    static_paths: &mut FastHashMap<Box<str>, usize>,
    key: Box<str>,
    index: usize,
    routes: &[Route<T>],
) {
    match static_paths.entry(key) {
        Entry::Occupied(mut existing) => {
            tracing::debug!(
                path = %existing.key(),
                kept = routes[index].name(),
                shadowed = routes[*existing.get()].name(),
                "static path already registered"
            );
            existing.insert(index);
        }
        Entry::Vacant(slot) => {
            slot.insert(index);
        }
    }
}

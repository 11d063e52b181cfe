//! Immutable filter query

use indexmap::IndexSet;

/// Error type for query construction
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Both products and verticals were given
    #[error("Provide either verticals or products, not both")]
    ConflictingSelectors,

    /// Neither products nor verticals were given
    #[error("Either products or verticals must be provided")]
    MissingSelector,

    /// No branch and no manifest path, so there is no manifest to read
    #[error("Branch must be provided if no manifest file is given")]
    MissingBranch,
}

/// Which grouping tag a query filters on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Products(IndexSet<String>),
    Verticals(IndexSet<String>),
}

/// Unvalidated query input as collected from the command line
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    pub products: Vec<String>,
    pub verticals: Vec<String>,
    pub branch: Option<String>,
    pub version: Option<String>,
    /// Whether a manifest path was given directly
    pub manifest_supplied: bool,
}

/// A validated query. Built once and passed by reference to the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    selector: Selector,
    branch: Option<String>,
    version: Option<String>,
}

impl Query {
    /// Query on products, no branch or version constraint
    pub fn products<I, S>(products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selector: Selector::Products(products.into_iter().map(Into::into).collect()),
            branch: None,
            version: None,
        }
    }

    /// Query on verticals, no branch or version constraint
    pub fn verticals<I, S>(verticals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selector: Selector::Verticals(verticals.into_iter().map(Into::into).collect()),
            branch: None,
            version: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = non_empty(Some(branch.into()));
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = non_empty(Some(version.into()));
        self
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl TryFrom<QueryArgs> for Query {
    type Error = QueryError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let products = non_empty_set(args.products);
        let verticals = non_empty_set(args.verticals);
        let branch = non_empty(args.branch);
        let version = non_empty(args.version);

        let selector = match (products.is_empty(), verticals.is_empty()) {
            (false, false) => return Err(QueryError::ConflictingSelectors),
            (true, true) => return Err(QueryError::MissingSelector),
            (false, true) => Selector::Products(products),
            (true, false) => Selector::Verticals(verticals),
        };

        if branch.is_none() && !args.manifest_supplied {
            return Err(QueryError::MissingBranch);
        }

        Ok(Self {
            selector,
            branch,
            version,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_set(values: Vec<String>) -> IndexSet<String> {
    values.into_iter().filter(|v| !v.is_empty()).collect()
}

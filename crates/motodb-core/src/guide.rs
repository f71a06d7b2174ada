//! Content of the deployment guide screen.

/// One titled block of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

const SECTIONS: &[GuideSection] = &[
    GuideSection {
        title: "Step 1: publish as a static site",
        lines: &[
            "Create a repository named `kymco-db`.",
            "Push the catalog JSON and the built front end to it.",
            "Enable static hosting (e.g. Settings -> Pages) on the default branch.",
        ],
    },
    GuideSection {
        title: "Step 2: embed in a mini-program",
        lines: &[
            "The browser build is a plain H5 page, so a `web-view` component can wrap it:",
            "<web-view src=\"https://<your-user>.github.io/kymco-db/\" />",
            "Add the hosting domain to the mini-program's allowed business domains.",
        ],
    },
    GuideSection {
        title: "Why this setup",
        lines: &[
            "No server to buy: static hosting is free.",
            "Catalog updates go live without re-publishing the mini-program.",
            "Works with in-app sharing and the built-in browser.",
        ],
    },
];

/// Guide sections in display order.
pub fn deployment_guide() -> &'static [GuideSection] {
    SECTIONS
}

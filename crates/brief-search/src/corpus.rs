//! Built-in brief corpus
//!
//! A small set of Ontario practice briefs so the search endpoint works
//! without any external data source. Replace by indexing a real corpus
//! into `BriefIndex::open_or_create`.

use crate::Brief;

struct Seed {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    url: &'static str,
    jurisdiction: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "on-aps-deposits",
        title: "Deposits under an Agreement of Purchase and Sale",
        content: "A deposit demonstrates the buyer's good faith and is credited against \
                  the purchase price on closing. Ontario practice treats roughly five \
                  percent as customary for residential resale transactions; a markedly \
                  smaller deposit weakens the seller's position on breach.",
        url: "https://example.org/briefs/on-aps-deposits",
        jurisdiction: "ON",
    },
    Seed {
        id: "on-rent-deposit",
        title: "Rent deposits in residential tenancies",
        content: "Ontario landlords may collect a rent deposit no greater than one \
                  month's rent, applied to the last rental period. Interest accrues \
                  annually at the guideline rate, and the deposit must be returned or \
                  applied promptly when the tenancy ends.",
        url: "https://example.org/briefs/on-rent-deposit",
        jurisdiction: "ON",
    },
    Seed {
        id: "on-nda-scope",
        title: "Drafting the definition of Confidential Information",
        content: "A non-disclosure agreement stands or falls on its definition clause. \
                  Overbroad definitions risk unenforceability; carve-outs for public \
                  knowledge, prior possession, and independent development are standard.",
        url: "https://example.org/briefs/on-nda-scope",
        jurisdiction: "ON",
    },
    Seed {
        id: "on-esa-probation",
        title: "Probationary periods and the Employment Standards Act",
        content: "Employment contracts commonly provide a three month probationary \
                  period, mirroring the statutory threshold before termination notice \
                  is owed. Longer probation clauses invite scrutiny and may not \
                  displace notice entitlements.",
        url: "https://example.org/briefs/on-esa-probation",
        jurisdiction: "ON",
    },
    Seed {
        id: "on-wills-execution",
        title: "Due execution of wills",
        content: "A will must be signed by the testator in the presence of two \
                  witnesses, both present at the same time, who then subscribe the \
                  will in the testator's presence. A missing witness signature is the \
                  most common execution defect.",
        url: "https://example.org/briefs/on-wills-execution",
        jurisdiction: "ON",
    },
    Seed {
        id: "ca-lead-disclosure",
        title: "Federal lead paint disclosure for older housing",
        content: "Residential sale and lease agreements for housing built before 1978 \
                  require a lead-based paint disclosure under federal law in the United \
                  States; cross-border purchasers should confirm local equivalents.",
        url: "https://example.org/briefs/ca-lead-disclosure",
        jurisdiction: "US",
    },
];

/// The built-in corpus as owned briefs ready for indexing
pub fn builtin_briefs() -> Vec<Brief> {
    SEEDS
        .iter()
        .map(|seed| Brief {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            content: seed.content.to_string(),
            url: seed.url.to_string(),
            jurisdiction: seed.jurisdiction.to_string(),
        })
        .collect()
}

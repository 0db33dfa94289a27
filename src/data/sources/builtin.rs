//
// Copyright (c) 2026 Nathan Fiedler
//

//! Content of the presentations page as authored for the libMesh website.

use crate::domain::entities::{Catalog, Item, LinkEntry, Section};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref CATALOG: Catalog = build_catalog();
}

fn link(text: &str, url: &str, annotation: &str) -> Item {
    let entry = LinkEntry::new(text, url);
    if annotation.is_empty() {
        entry.into()
    } else {
        entry.annotation(annotation).into()
    }
}

fn group(label: &str, links: Vec<LinkEntry>) -> Item {
    Item::Group {
        label: label.to_owned(),
        links,
    }
}

fn build_catalog() -> Catalog {
    let overviews = Section::new(
        "libMesh Overviews",
        vec![
            link(
                "libMesh Presentation",
                "http://cfdlab.ae.utexas.edu/~benkirk/libmesh_uwa03.pdf",
                "(from the June 2003 UWA Shortcourse)",
            ),
            link(
                "LibMesh Experience and Usage",
                "http://cfdlab.ae.utexas.edu/~peterson/ERDC_talk.pdf",
                "(January 2007 ERDC course)",
            ),
            link(
                "AMR Infrastructure Expansion, Adding Complexity",
                "http://cfdlab.ae.utexas.edu/~roystgnr/vicksburg.pdf",
                "(January 2007 ERDC course)",
            ),
            link(
                "LibMesh Introduction",
                "http://cfdlab.ae.utexas.edu/~roystgnr/libmesh_intro.pdf",
                "(June 2007 lecture, Num. Meth. for Transport in Semiconductors)",
            ),
            link(
                "LibMesh Finite Element Library",
                "http://cfdlab.ae.utexas.edu/~roystgnr/sandia_libmesh.pdf",
                "(August 2007 seminar, Sandia National Laboratories)",
            ),
        ],
    );

    let applications = Section::new(
        "Applications",
        vec![
            LinkEntry::new(
                "Advanced Flows Class Project",
                "http://cfdlab.ae.utexas.edu/~benkirk/adv_flows_project.pdf",
            )
            .annotation("(natural convection, 2002)")
            .retire()
            .into(),
            LinkEntry::new(
                "SIAM Geosciences 2003",
                "http://cfdlab.ae.utexas.edu/~benkirk/siam_geo.pdf",
            )
            .retire()
            .into(),
            link(
                "AMR Applications",
                "http://cfdlab.ae.utexas.edu/~benkirk/applications_uwa03.pdf",
                "(from the June 2003 UWA Shortcourse)",
            ),
            link(
                "Finite Elements - Introduction and Applications",
                "http://cfdlab.ae.utexas.edu/~benkirk/seminar/talk.pdf",
                "(April 2004 NASA/JSC technical seminar)",
            ),
            link(
                "SUPG Finite Element Simulations of Compressible Flows for Aerothermodynamic Applications",
                "http://ntrs.nasa.gov/search.jsp?N=4294668673",
                ", February 2007",
            ),
            link(
                "Benjamin S. Kirk's PhD Dissertation Defense",
                "http://cfdlab.ae.utexas.edu/~benkirk/defense.pdf",
                ", March 2007",
            ),
        ],
    );

    let usnccm = Section::new(
        "US National Congress on Computational Mechanics",
        vec![
            group(
                "USNCCM VII",
                vec![
                    LinkEntry::new(
                        "Abstract",
                        "http://usnccm.sandia.gov/mslist/upload/IncomprssblCFD/2230_Final_abstract.pdf",
                    ),
                    LinkEntry::new(
                        "Presentation.",
                        "http://www.cfdlab.ae.utexas.edu/~peterson/usnccm.pdf",
                    ),
                ],
            ),
            group(
                "USNCCM VIII",
                vec![
                    LinkEntry::new(
                        "Compressible Flow Studies Using Parallel Adaptive Mesh Refinement",
                        "http://www.cfdlab.ae.utexas.edu/~benkirk/carter-USNCCMVIII.pdf",
                    ),
                    LinkEntry::new(
                        "Algorithms for Compressible Flows with Adaptive Mesh Refinement",
                        "http://www.cfdlab.ae.utexas.edu/~benkirk/carey-USNCCMVIII.pdf",
                    ),
                    LinkEntry::new(
                        "Adaptive Finite Element Simulations of Thermosolutal Convection in Porous Media",
                        "http://www.cfdlab.ae.utexas.edu/~peterson/USNCCM8.pdf",
                    ),
                ],
            ),
            group(
                "USNCCM IX",
                vec![
                    LinkEntry::new(
                        "On Combining Mesh Redistribution with H-Adaptivity",
                        "http://www.cfdlab.ae.utexas.edu/~benkirk/gaston_USNCCM_2007.pdf",
                    ),
                    LinkEntry::new(
                        "Cahn-Hilliard Phase Decomposition and Directed Pattern Assembly",
                        "http://www.cfdlab.ae.utexas.edu/~roystgnr/usnccm9.pdf",
                    ),
                ],
            ),
        ],
    );

    let rodeo = Section::new(
        "Finite Element Rodeo",
        vec![
            link(
                "A Stabilized h-Adaptive Continuation Method for Double-Diffusive Convection in Porous Media",
                "http://www.cfdlab.ae.utexas.edu/~peterson/Rodeo_2006.pdf",
                "",
            ),
            link(
                "Adaptive C1 Macroelements for Fourth-Order and Divergence-Free Problems",
                "http://www.cfdlab.ae.utexas.edu/~roystgnr/2006rodeoslides.pdf",
                "",
            ),
        ],
    );

    let misc = Section::new(
        "Miscellaneous",
        vec![
            link(
                "Scraper Flow",
                "http://www.cfdlab.ae.utexas.edu/~peterson/scraper.pdf",
                "Presentation with I. Schoegl.",
            ),
            link(
                "Albuquerque Academy",
                "http://www.challenge.nm.org/FinalReports/08.pdf",
                "Presentation on Stress Analysis in a Torus.",
            ),
            link(
                "SAVIAC",
                "http://www.saviac.org/74th_Symposium/abstracts/U040.htm",
                "conference abstract.",
            ),
            Item::Citation {
                authors: "Marc Buffat, Anne Cadiou, Lionel Le Penven, and Catherine Le Ribault"
                    .to_owned(),
                title: "Comparison of implicit, explicit, center and upwind schemes for the \
                        simulation of internal vortex flow at low Mach number."
                    .to_owned(),
                link: LinkEntry::new(
                    "Low Mach Conference",
                    "http://www.ufrmeca.univ-lyon1.fr/~buffat/PUBLI_HTML/LowMach04.pdf",
                )
                .annotation(", June 2004."),
            },
        ],
    );

    Catalog {
        title: "libMesh Presentations".to_owned(),
        heading: "Presentations".to_owned(),
        sections: vec![overviews, applications, usnccm, rodeo, misc],
    }
}

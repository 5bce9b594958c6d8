use crate::types::TemplateFamily;

/// Bundle the save routine writes into.
pub(crate) const OUT_BUNDLE: &str = "outState";

/// Bundle the restore routine reads from.
pub(crate) const IN_BUNDLE: &str = "savedInstanceState";

/// Constant holding the wrapped parent state key (view family only).
pub(crate) const SUPER_STATE_KEY: &str = "SUPER_STATE_KEY";

/// Constant holding the key namespace when keys are namespaced.
pub(crate) const BASE_KEY: &str = "BASE_KEY";

///
/// LifecycleTemplate
///
/// Fixed text around the per-field statements. `{owner}` in a signature is
/// replaced by the owner's qualified name.
///

pub struct LifecycleTemplate {
    pub imports: &'static [&'static str],
    pub save_signature: &'static str,
    pub save_prologue: &'static [&'static str],
    pub save_epilogue: &'static [&'static str],
    pub restore_signature: &'static str,
    pub restore_guard: Guard,
    pub restore_prologue: &'static [&'static str],
    pub restore_epilogue: &'static [&'static str],
    pub needs_super_key: bool,
}

///
/// Guard
/// early exit at the top of the restore routine
///

pub struct Guard {
    pub condition: &'static str,
    pub exit: &'static str,
}

static HOST: LifecycleTemplate = LifecycleTemplate {
    imports: &["android.os.Bundle"],
    save_signature: "public static void saveInstanceState({owner} target, Bundle outState)",
    save_prologue: &[],
    save_epilogue: &[],
    restore_signature: "public static void restoreInstanceState({owner} target, Bundle savedInstanceState)",
    restore_guard: Guard {
        condition: "savedInstanceState == null",
        exit: "return;",
    },
    restore_prologue: &[],
    restore_epilogue: &[],
    needs_super_key: false,
};

static VIEW: LifecycleTemplate = LifecycleTemplate {
    imports: &["android.os.Bundle", "android.os.Parcelable"],
    save_signature: "public static Parcelable saveInstanceState({owner} target, Parcelable state)",
    save_prologue: &[
        "Bundle outState = new Bundle();",
        "outState.putParcelable(SUPER_STATE_KEY, state);",
    ],
    save_epilogue: &["return outState;"],
    restore_signature: "public static Parcelable restoreInstanceState({owner} target, Parcelable state)",
    restore_guard: Guard {
        condition: "!(state instanceof Bundle)",
        exit: "return state;",
    },
    restore_prologue: &["Bundle savedInstanceState = (Bundle) state;"],
    restore_epilogue: &["return savedInstanceState.getParcelable(SUPER_STATE_KEY);"],
    needs_super_key: true,
};

impl LifecycleTemplate {
    #[must_use]
    pub fn for_family(family: TemplateFamily) -> &'static Self {
        match family {
            TemplateFamily::Host => &HOST,
            TemplateFamily::View => &VIEW,
        }
    }
}

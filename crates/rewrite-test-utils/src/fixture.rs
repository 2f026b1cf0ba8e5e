//! The scripted history used to exercise rename detection.
//!
//! | Commit | Change |
//! |---|---|
//! | `c1 - initial` | add `a`, `b`, `dir/c`, `d` |
//! | `c2` | modify `d` |
//! | `c3` | modify `a` (`a\n` to `a\na1\n`) |
//! | `r1-identity` | move `a` to `dir/a-moved` |
//! | `c4 - add identical files` | add `s1`, `s2`, `s3` with identical content |
//! | `r2-ambiguous` | move `s1`, `s2`, `s3` to `z`, `b1`, `b2` |
//! | `r3` | move `dir/c` to `dir/c-moved` appending a line, modify `b` |

use crate::git::FixtureRepo;

/// Commit summaries of the fixture history, oldest first.
pub const FIXTURE_COMMITS: [&str; 7] = [
    "c1 - initial",
    "c2",
    "c3",
    "r1-identity",
    "c4 - add identical files",
    "r2-ambiguous",
    "r3",
];

/// Build the fixture repository described in the module docs.
pub fn diff_fixture() -> FixtureRepo {
    let repo = FixtureRepo::new();

    repo.write("a", "a\n");
    repo.write("b", "b\n");
    repo.write("dir/c", "c\nc1\nc2\n");
    repo.write("d", "d\n");
    repo.commit(FIXTURE_COMMITS[0]);

    repo.append("d", "d1\n");
    repo.commit(FIXTURE_COMMITS[1]);

    repo.append("a", "a1\n");
    repo.commit(FIXTURE_COMMITS[2]);

    repo.rename("a", "dir/a-moved");
    repo.commit(FIXTURE_COMMITS[3]);

    repo.write("s1", "s\n");
    repo.write("s2", "s\n");
    repo.write("s3", "s\n");
    repo.commit(FIXTURE_COMMITS[4]);

    repo.rename("s1", "z");
    repo.rename("s2", "b1");
    repo.rename("s3", "b2");
    repo.commit(FIXTURE_COMMITS[5]);

    repo.rename("dir/c", "dir/c-moved");
    repo.append("dir/c-moved", "c3\n");
    repo.append("b", "b1\n");
    repo.commit(FIXTURE_COMMITS[6]);

    repo
}

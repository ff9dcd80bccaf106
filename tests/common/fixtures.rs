//! Static log and annotation corpora used across harnesses.
//!
//! Log corpora imitate what GNU `time` wrapped around per-chromosome jobs
//! actually prints: a header naming the input file, program chatter, an
//! optional `Command exited with non-zero status N` line, then the timing
//! summary and page-fault line.

/// One job that succeeds.
pub const LOG_SINGLE: &str = "\
=== hg19/chr1.fa
loading model weights
41.20user 0.93system 0:42.37elapsed 99%CPU (0avgtext+0avgdata 812344maxresident)k
0inputs+1632outputs (0major+203711minor)pagefaults 0swaps
";

/// Exit status 1, then the retry's timing line.
pub const LOG_RETRY: &str = "\
=== hg19/chr2.fa
Command exited with non-zero status 1
=== retrying
38.50user 1.10system 0:40.01elapsed 98%CPU (0avgtext+0avgdata 799000maxresident)k
";

/// Exit status 137 followed by a timing line that must be ignored.
pub const LOG_KILLED: &str = "\
=== hg19/chr3.fa
Killed
Command exited with non-zero status 137
10.00user 0.50system 0:10.70elapsed 98%CPU (0avgtext+0avgdata 1024maxresident)k
";

/// A realistic run: success, retry, kill, long job, duplicate key, and a
/// header still pending when the log ends.
pub const LOG_MIXED: &str = "\
Starting benchmark run
=== hg19/chr1.fa
loading model weights
41.20user 0.93system 0:42.37elapsed 99%CPU (0avgtext+0avgdata 812344maxresident)k
0inputs+1632outputs (0major+203711minor)pagefaults 0swaps
=== hg19/chr2.fa
Command exited with non-zero status 1
38.50user 1.10system 0:40.01elapsed 98%CPU (0avgtext+0avgdata 799000maxresident)k
=== hg19/chr3.fa
Killed
Command exited with non-zero status 137
10.00user 0.50system 0:10.70elapsed 98%CPU (0avgtext+0avgdata 1024maxresident)k
=== hg19/chr4.fa
3600.25user 12.00system 1:02:03.50elapsed 97%CPU (0avgtext+0avgdata 9000maxresident)k
=== hg19/chr1.fa
63.00user 2.00system 1:05.14elapsed 99%CPU (0avgtext+0avgdata 812344maxresident)k
=== hg19/chr5.fa
loading model weights
";

/// Table expected from [`LOG_MIXED`] with the default output format.
pub const LOG_MIXED_TABLE: &str = "\
job,real,sys,user
hg19/chr1.fa,65.14,2.0,63.0
hg19/chr2.fa,40.01,1.1,38.5
hg19/chr3.fa,,,
hg19/chr4.fa,3723.5,12.0,3600.25
";

/// A timing line whose elapsed field has 75 seconds.
pub const LOG_MALFORMED: &str = "\
=== hg19/chr1.fa
41.20user 0.93system 0:42.37elapsed 99%CPU
=== hg19/chr2.fa
1.00user 0.10system 5:75.12elapsed 20%CPU
";

/// Generate a log of `n` jobs; every tenth is killed, every seventh retried.
pub fn corpus_high_volume(n: usize) -> String {
    let mut log = String::new();
    for i in 0..n {
        log.push_str(&format!("=== hg38/chr{i}.fa\n"));
        if i % 10 == 0 {
            log.push_str("Command exited with non-zero status 2\n");
        } else if i % 7 == 0 {
            log.push_str("Command exited with non-zero status 1\n");
        }
        log.push_str(&format!(
            "{}.{:02}user 0.{:02}system {}:{:02}.{:02}elapsed 99%CPU\n",
            i % 500,
            i % 100,
            i % 97,
            i / 60 % 60,
            i % 60,
            i % 100,
        ));
    }
    log
}

// ---------------------------------------------------------------------------
// Annotation corpora
// ---------------------------------------------------------------------------

pub const KNOWN_REPEATS: &str = r#"{
  "DFAM": {
    "DF0000001.4": "SINE/Alu",
    "DF0000029.5": "Satellite",
    "L1HS": "LINE/L1"
  },
  "RepeatMasker": {
    "AluY": "SINE/Alu",
    "L1HS": "LINE/L1"
  }
}"#;

pub const EMBL_LIBRARY: &str = "\
ID   AluY  repeatmasker; SINE; Alu; 12 BP.
XX
DE   Alu Y subfamily.
XX
SQ   Sequence 12 BP;
     GGCCGGGCGC GG                                                   12
//
ID   L1HS  repeatmasker; LINE; L1; 4 BP.
XX
SQ   Sequence 4 BP;
     acgt                                                             4
//
";

pub const FASTA_LIBRARY: &str = ">AluY\nGGCCGGGCGCGG\n>Novel\nACGT\n>L1HS\nACGT\n";

pub const DFAM_HITS: &str = "\
#seq_name\tfamily_acc\tfamily_name\tbits\te-value\tbias\thmm-st\thmm-en\tstrand\tali-st\tali-en\tenv-st\tenv-en\tsq-len\tkimura_div
chr1\tDF0000001.4\tAluY\t250.1\t1e-70\t2.1\t1\t311\t+\t10468\t10778\t10460\t10780\t248956422\t8.5
chr1\tDF0000888.2\tOther\t30.0\t1e-3\t0.1\t1\t90\t-\t20000\t20090\t19990\t20100\t248956422\t20.1
chr2\tDF0000029.5\tALR\t120.7\t1e-30\t0.0\t1\t171\t+\t500\t671\t490\t680\t242193529\t12.0
";

pub const HMM_LIBRARY: &str = "\
# Dfam HMM release
HMMER3/f [3.1b2 | February 2015]
NAME  AluY
ACC   DF0000001.4
LENG  311
//
HMMER3/f [3.1b2 | February 2015]
NAME  Other
ACC   DF0000888.2
LENG  90
//
";

//! Canonical, ABI-independent syscall identifiers.
//!
//! Generated from the observed x86_64 syscall table plus a handful of
//! i386-only legacy identifiers (`old*`, `*64`, `mmap2`, `waitpid`) that
//! never existed on x86_64/x32 but are named explicitly by the policy
//! engine's path-argument syscall list. See DESIGN.md.

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u16)]
pub enum SyscallId {
    /// Sentinel: no canonical syscall maps to this slot.
    None = 0,
    Read = 1,
    Write = 2,
    Open = 3,
    Close = 4,
    Stat = 5,
    Fstat = 6,
    Lstat = 7,
    Poll = 8,
    Lseek = 9,
    Mmap = 10,
    Mprotect = 11,
    Munmap = 12,
    Brk = 13,
    RtSigaction = 14,
    RtSigprocmask = 15,
    RtSigreturn = 16,
    Ioctl = 17,
    Pread64 = 18,
    Pwrite64 = 19,
    Readv = 20,
    Writev = 21,
    Access = 22,
    Pipe = 23,
    Select = 24,
    SchedYield = 25,
    Mremap = 26,
    Msync = 27,
    Mincore = 28,
    Madvise = 29,
    Shmget = 30,
    Shmat = 31,
    Shmctl = 32,
    Dup = 33,
    Dup2 = 34,
    Pause = 35,
    Nanosleep = 36,
    Getitimer = 37,
    Alarm = 38,
    Setitimer = 39,
    Getpid = 40,
    Sendfile = 41,
    Socket = 42,
    Connect = 43,
    Accept = 44,
    Sendto = 45,
    Recvfrom = 46,
    Sendmsg = 47,
    Recvmsg = 48,
    Shutdown = 49,
    Bind = 50,
    Listen = 51,
    Getsockname = 52,
    Getpeername = 53,
    Socketpair = 54,
    Setsockopt = 55,
    Getsockopt = 56,
    Clone = 57,
    Fork = 58,
    Vfork = 59,
    Execve = 60,
    Exit = 61,
    Wait4 = 62,
    Kill = 63,
    Uname = 64,
    Semget = 65,
    Semop = 66,
    Semctl = 67,
    Shmdt = 68,
    Msgget = 69,
    Msgsnd = 70,
    Msgrcv = 71,
    Msgctl = 72,
    Fcntl = 73,
    Flock = 74,
    Fsync = 75,
    Fdatasync = 76,
    Truncate = 77,
    Ftruncate = 78,
    Getdents = 79,
    Getcwd = 80,
    Chdir = 81,
    Fchdir = 82,
    Rename = 83,
    Mkdir = 84,
    Rmdir = 85,
    Creat = 86,
    Link = 87,
    Unlink = 88,
    Symlink = 89,
    Readlink = 90,
    Chmod = 91,
    Fchmod = 92,
    Chown = 93,
    Fchown = 94,
    Lchown = 95,
    Umask = 96,
    Gettimeofday = 97,
    Getrlimit = 98,
    Getrusage = 99,
    Sysinfo = 100,
    Times = 101,
    Ptrace = 102,
    Getuid = 103,
    Syslog = 104,
    Getgid = 105,
    Setuid = 106,
    Setgid = 107,
    Geteuid = 108,
    Getegid = 109,
    Setpgid = 110,
    Getppid = 111,
    Getpgrp = 112,
    Setsid = 113,
    Setreuid = 114,
    Setregid = 115,
    Getgroups = 116,
    Setgroups = 117,
    Setresuid = 118,
    Getresuid = 119,
    Setresgid = 120,
    Getresgid = 121,
    Getpgid = 122,
    Setfsuid = 123,
    Setfsgid = 124,
    Getsid = 125,
    Capget = 126,
    Capset = 127,
    RtSigpending = 128,
    RtSigtimedwait = 129,
    RtSigqueueinfo = 130,
    RtSigsuspend = 131,
    Sigaltstack = 132,
    Utime = 133,
    Mknod = 134,
    Uselib = 135,
    Personality = 136,
    Ustat = 137,
    Statfs = 138,
    Fstatfs = 139,
    Sysfs = 140,
    Getpriority = 141,
    Setpriority = 142,
    SchedSetparam = 143,
    SchedGetparam = 144,
    SchedSetscheduler = 145,
    SchedGetscheduler = 146,
    SchedGetPriorityMax = 147,
    SchedGetPriorityMin = 148,
    SchedRrGetInterval = 149,
    Mlock = 150,
    Munlock = 151,
    Mlockall = 152,
    Munlockall = 153,
    Vhangup = 154,
    ModifyLdt = 155,
    PivotRoot = 156,
    Sysctl = 157,
    Prctl = 158,
    ArchPrctl = 159,
    Adjtimex = 160,
    Setrlimit = 161,
    Chroot = 162,
    Sync = 163,
    Acct = 164,
    Settimeofday = 165,
    Mount = 166,
    Umount2 = 167,
    Swapon = 168,
    Swapoff = 169,
    Reboot = 170,
    Sethostname = 171,
    Setdomainname = 172,
    Iopl = 173,
    Ioperm = 174,
    CreateModule = 175,
    InitModule = 176,
    DeleteModule = 177,
    GetKernelSyms = 178,
    QueryModule = 179,
    Quotactl = 180,
    Nfsservctl = 181,
    Getpmsg = 182,
    Putpmsg = 183,
    AfsSyscall = 184,
    Tuxcall = 185,
    Security = 186,
    Gettid = 187,
    Readahead = 188,
    Setxattr = 189,
    Lsetxattr = 190,
    Fsetxattr = 191,
    Getxattr = 192,
    Lgetxattr = 193,
    Fgetxattr = 194,
    Listxattr = 195,
    Llistxattr = 196,
    Flistxattr = 197,
    Removexattr = 198,
    Lremovexattr = 199,
    Fremovexattr = 200,
    Tkill = 201,
    Time = 202,
    Futex = 203,
    SchedSetaffinity = 204,
    SchedGetaffinity = 205,
    SetThreadArea = 206,
    IoSetup = 207,
    IoDestroy = 208,
    IoGetevents = 209,
    IoSubmit = 210,
    IoCancel = 211,
    GetThreadArea = 212,
    LookupDcookie = 213,
    EpollCreate = 214,
    EpollCtlOld = 215,
    EpollWaitOld = 216,
    RemapFilePages = 217,
    Getdents64 = 218,
    SetTidAddress = 219,
    RestartSyscall = 220,
    Semtimedop = 221,
    Fadvise64 = 222,
    TimerCreate = 223,
    TimerSettime = 224,
    TimerGettime = 225,
    TimerGetoverrun = 226,
    TimerDelete = 227,
    ClockSettime = 228,
    ClockGettime = 229,
    ClockGetres = 230,
    ClockNanosleep = 231,
    ExitGroup = 232,
    EpollWait = 233,
    EpollCtl = 234,
    Tgkill = 235,
    Utimes = 236,
    Vserver = 237,
    Mbind = 238,
    SetMempolicy = 239,
    GetMempolicy = 240,
    MqOpen = 241,
    MqUnlink = 242,
    MqTimedsend = 243,
    MqTimedreceive = 244,
    MqNotify = 245,
    MqGetsetattr = 246,
    KexecLoad = 247,
    Waitid = 248,
    AddKey = 249,
    RequestKey = 250,
    Keyctl = 251,
    IoprioSet = 252,
    IoprioGet = 253,
    InotifyInit = 254,
    InotifyAddWatch = 255,
    InotifyRmWatch = 256,
    MigratePages = 257,
    Openat = 258,
    Mkdirat = 259,
    Mknodat = 260,
    Fchownat = 261,
    Futimesat = 262,
    Newfstatat = 263,
    Unlinkat = 264,
    Renameat = 265,
    Linkat = 266,
    Symlinkat = 267,
    Readlinkat = 268,
    Fchmodat = 269,
    Faccessat = 270,
    Pselect6 = 271,
    Ppoll = 272,
    Unshare = 273,
    SetRobustList = 274,
    GetRobustList = 275,
    Splice = 276,
    Tee = 277,
    SyncFileRange = 278,
    Vmsplice = 279,
    MovePages = 280,
    Utimensat = 281,
    EpollPwait = 282,
    Signalfd = 283,
    TimerfdCreate = 284,
    Eventfd = 285,
    Fallocate = 286,
    TimerfdSettime = 287,
    TimerfdGettime = 288,
    Accept4 = 289,
    Signalfd4 = 290,
    Eventfd2 = 291,
    EpollCreate1 = 292,
    Dup3 = 293,
    Pipe2 = 294,
    InotifyInit1 = 295,
    Preadv = 296,
    Pwritev = 297,
    RtTgsigqueueinfo = 298,
    PerfEventOpen = 299,
    Recvmmsg = 300,
    FanotifyInit = 301,
    FanotifyMark = 302,
    Prlimit64 = 303,
    NameToHandleAt = 304,
    OpenByHandleAt = 305,
    ClockAdjtime = 306,
    Syncfs = 307,
    Sendmmsg = 308,
    Setns = 309,
    Getcpu = 310,
    ProcessVmReadv = 311,
    ProcessVmWritev = 312,
    Kcmp = 313,
    FinitModule = 314,
    SchedSetattr = 315,
    SchedGetattr = 316,
    Renameat2 = 317,
    Seccomp = 318,
    Getrandom = 319,
    MemfdCreate = 320,
    KexecFileLoad = 321,
    Bpf = 322,
    Execveat = 323,
    Userfaultfd = 324,
    Membarrier = 325,
    Mlock2 = 326,
    CopyFileRange = 327,
    Preadv2 = 328,
    Pwritev2 = 329,
    PkeyMprotect = 330,
    PkeyAlloc = 331,
    PkeyFree = 332,
    Statx = 333,
    Oldstat = 334,
    Oldfstat = 335,
    Oldlstat = 336,
    Stat64 = 337,
    Fstat64 = 338,
    Lstat64 = 339,
    Fstatat64 = 340,
    Mmap2 = 341,
    Waitpid = 342,
}

impl SyscallId {
    /// All non-`None` canonical ids, in declaration order.
    pub const ALL: &'static [SyscallId] = &[
        SyscallId::Read,
        SyscallId::Write,
        SyscallId::Open,
        SyscallId::Close,
        SyscallId::Stat,
        SyscallId::Fstat,
        SyscallId::Lstat,
        SyscallId::Poll,
        SyscallId::Lseek,
        SyscallId::Mmap,
        SyscallId::Mprotect,
        SyscallId::Munmap,
        SyscallId::Brk,
        SyscallId::RtSigaction,
        SyscallId::RtSigprocmask,
        SyscallId::RtSigreturn,
        SyscallId::Ioctl,
        SyscallId::Pread64,
        SyscallId::Pwrite64,
        SyscallId::Readv,
        SyscallId::Writev,
        SyscallId::Access,
        SyscallId::Pipe,
        SyscallId::Select,
        SyscallId::SchedYield,
        SyscallId::Mremap,
        SyscallId::Msync,
        SyscallId::Mincore,
        SyscallId::Madvise,
        SyscallId::Shmget,
        SyscallId::Shmat,
        SyscallId::Shmctl,
        SyscallId::Dup,
        SyscallId::Dup2,
        SyscallId::Pause,
        SyscallId::Nanosleep,
        SyscallId::Getitimer,
        SyscallId::Alarm,
        SyscallId::Setitimer,
        SyscallId::Getpid,
        SyscallId::Sendfile,
        SyscallId::Socket,
        SyscallId::Connect,
        SyscallId::Accept,
        SyscallId::Sendto,
        SyscallId::Recvfrom,
        SyscallId::Sendmsg,
        SyscallId::Recvmsg,
        SyscallId::Shutdown,
        SyscallId::Bind,
        SyscallId::Listen,
        SyscallId::Getsockname,
        SyscallId::Getpeername,
        SyscallId::Socketpair,
        SyscallId::Setsockopt,
        SyscallId::Getsockopt,
        SyscallId::Clone,
        SyscallId::Fork,
        SyscallId::Vfork,
        SyscallId::Execve,
        SyscallId::Exit,
        SyscallId::Wait4,
        SyscallId::Kill,
        SyscallId::Uname,
        SyscallId::Semget,
        SyscallId::Semop,
        SyscallId::Semctl,
        SyscallId::Shmdt,
        SyscallId::Msgget,
        SyscallId::Msgsnd,
        SyscallId::Msgrcv,
        SyscallId::Msgctl,
        SyscallId::Fcntl,
        SyscallId::Flock,
        SyscallId::Fsync,
        SyscallId::Fdatasync,
        SyscallId::Truncate,
        SyscallId::Ftruncate,
        SyscallId::Getdents,
        SyscallId::Getcwd,
        SyscallId::Chdir,
        SyscallId::Fchdir,
        SyscallId::Rename,
        SyscallId::Mkdir,
        SyscallId::Rmdir,
        SyscallId::Creat,
        SyscallId::Link,
        SyscallId::Unlink,
        SyscallId::Symlink,
        SyscallId::Readlink,
        SyscallId::Chmod,
        SyscallId::Fchmod,
        SyscallId::Chown,
        SyscallId::Fchown,
        SyscallId::Lchown,
        SyscallId::Umask,
        SyscallId::Gettimeofday,
        SyscallId::Getrlimit,
        SyscallId::Getrusage,
        SyscallId::Sysinfo,
        SyscallId::Times,
        SyscallId::Ptrace,
        SyscallId::Getuid,
        SyscallId::Syslog,
        SyscallId::Getgid,
        SyscallId::Setuid,
        SyscallId::Setgid,
        SyscallId::Geteuid,
        SyscallId::Getegid,
        SyscallId::Setpgid,
        SyscallId::Getppid,
        SyscallId::Getpgrp,
        SyscallId::Setsid,
        SyscallId::Setreuid,
        SyscallId::Setregid,
        SyscallId::Getgroups,
        SyscallId::Setgroups,
        SyscallId::Setresuid,
        SyscallId::Getresuid,
        SyscallId::Setresgid,
        SyscallId::Getresgid,
        SyscallId::Getpgid,
        SyscallId::Setfsuid,
        SyscallId::Setfsgid,
        SyscallId::Getsid,
        SyscallId::Capget,
        SyscallId::Capset,
        SyscallId::RtSigpending,
        SyscallId::RtSigtimedwait,
        SyscallId::RtSigqueueinfo,
        SyscallId::RtSigsuspend,
        SyscallId::Sigaltstack,
        SyscallId::Utime,
        SyscallId::Mknod,
        SyscallId::Uselib,
        SyscallId::Personality,
        SyscallId::Ustat,
        SyscallId::Statfs,
        SyscallId::Fstatfs,
        SyscallId::Sysfs,
        SyscallId::Getpriority,
        SyscallId::Setpriority,
        SyscallId::SchedSetparam,
        SyscallId::SchedGetparam,
        SyscallId::SchedSetscheduler,
        SyscallId::SchedGetscheduler,
        SyscallId::SchedGetPriorityMax,
        SyscallId::SchedGetPriorityMin,
        SyscallId::SchedRrGetInterval,
        SyscallId::Mlock,
        SyscallId::Munlock,
        SyscallId::Mlockall,
        SyscallId::Munlockall,
        SyscallId::Vhangup,
        SyscallId::ModifyLdt,
        SyscallId::PivotRoot,
        SyscallId::Sysctl,
        SyscallId::Prctl,
        SyscallId::ArchPrctl,
        SyscallId::Adjtimex,
        SyscallId::Setrlimit,
        SyscallId::Chroot,
        SyscallId::Sync,
        SyscallId::Acct,
        SyscallId::Settimeofday,
        SyscallId::Mount,
        SyscallId::Umount2,
        SyscallId::Swapon,
        SyscallId::Swapoff,
        SyscallId::Reboot,
        SyscallId::Sethostname,
        SyscallId::Setdomainname,
        SyscallId::Iopl,
        SyscallId::Ioperm,
        SyscallId::CreateModule,
        SyscallId::InitModule,
        SyscallId::DeleteModule,
        SyscallId::GetKernelSyms,
        SyscallId::QueryModule,
        SyscallId::Quotactl,
        SyscallId::Nfsservctl,
        SyscallId::Getpmsg,
        SyscallId::Putpmsg,
        SyscallId::AfsSyscall,
        SyscallId::Tuxcall,
        SyscallId::Security,
        SyscallId::Gettid,
        SyscallId::Readahead,
        SyscallId::Setxattr,
        SyscallId::Lsetxattr,
        SyscallId::Fsetxattr,
        SyscallId::Getxattr,
        SyscallId::Lgetxattr,
        SyscallId::Fgetxattr,
        SyscallId::Listxattr,
        SyscallId::Llistxattr,
        SyscallId::Flistxattr,
        SyscallId::Removexattr,
        SyscallId::Lremovexattr,
        SyscallId::Fremovexattr,
        SyscallId::Tkill,
        SyscallId::Time,
        SyscallId::Futex,
        SyscallId::SchedSetaffinity,
        SyscallId::SchedGetaffinity,
        SyscallId::SetThreadArea,
        SyscallId::IoSetup,
        SyscallId::IoDestroy,
        SyscallId::IoGetevents,
        SyscallId::IoSubmit,
        SyscallId::IoCancel,
        SyscallId::GetThreadArea,
        SyscallId::LookupDcookie,
        SyscallId::EpollCreate,
        SyscallId::EpollCtlOld,
        SyscallId::EpollWaitOld,
        SyscallId::RemapFilePages,
        SyscallId::Getdents64,
        SyscallId::SetTidAddress,
        SyscallId::RestartSyscall,
        SyscallId::Semtimedop,
        SyscallId::Fadvise64,
        SyscallId::TimerCreate,
        SyscallId::TimerSettime,
        SyscallId::TimerGettime,
        SyscallId::TimerGetoverrun,
        SyscallId::TimerDelete,
        SyscallId::ClockSettime,
        SyscallId::ClockGettime,
        SyscallId::ClockGetres,
        SyscallId::ClockNanosleep,
        SyscallId::ExitGroup,
        SyscallId::EpollWait,
        SyscallId::EpollCtl,
        SyscallId::Tgkill,
        SyscallId::Utimes,
        SyscallId::Vserver,
        SyscallId::Mbind,
        SyscallId::SetMempolicy,
        SyscallId::GetMempolicy,
        SyscallId::MqOpen,
        SyscallId::MqUnlink,
        SyscallId::MqTimedsend,
        SyscallId::MqTimedreceive,
        SyscallId::MqNotify,
        SyscallId::MqGetsetattr,
        SyscallId::KexecLoad,
        SyscallId::Waitid,
        SyscallId::AddKey,
        SyscallId::RequestKey,
        SyscallId::Keyctl,
        SyscallId::IoprioSet,
        SyscallId::IoprioGet,
        SyscallId::InotifyInit,
        SyscallId::InotifyAddWatch,
        SyscallId::InotifyRmWatch,
        SyscallId::MigratePages,
        SyscallId::Openat,
        SyscallId::Mkdirat,
        SyscallId::Mknodat,
        SyscallId::Fchownat,
        SyscallId::Futimesat,
        SyscallId::Newfstatat,
        SyscallId::Unlinkat,
        SyscallId::Renameat,
        SyscallId::Linkat,
        SyscallId::Symlinkat,
        SyscallId::Readlinkat,
        SyscallId::Fchmodat,
        SyscallId::Faccessat,
        SyscallId::Pselect6,
        SyscallId::Ppoll,
        SyscallId::Unshare,
        SyscallId::SetRobustList,
        SyscallId::GetRobustList,
        SyscallId::Splice,
        SyscallId::Tee,
        SyscallId::SyncFileRange,
        SyscallId::Vmsplice,
        SyscallId::MovePages,
        SyscallId::Utimensat,
        SyscallId::EpollPwait,
        SyscallId::Signalfd,
        SyscallId::TimerfdCreate,
        SyscallId::Eventfd,
        SyscallId::Fallocate,
        SyscallId::TimerfdSettime,
        SyscallId::TimerfdGettime,
        SyscallId::Accept4,
        SyscallId::Signalfd4,
        SyscallId::Eventfd2,
        SyscallId::EpollCreate1,
        SyscallId::Dup3,
        SyscallId::Pipe2,
        SyscallId::InotifyInit1,
        SyscallId::Preadv,
        SyscallId::Pwritev,
        SyscallId::RtTgsigqueueinfo,
        SyscallId::PerfEventOpen,
        SyscallId::Recvmmsg,
        SyscallId::FanotifyInit,
        SyscallId::FanotifyMark,
        SyscallId::Prlimit64,
        SyscallId::NameToHandleAt,
        SyscallId::OpenByHandleAt,
        SyscallId::ClockAdjtime,
        SyscallId::Syncfs,
        SyscallId::Sendmmsg,
        SyscallId::Setns,
        SyscallId::Getcpu,
        SyscallId::ProcessVmReadv,
        SyscallId::ProcessVmWritev,
        SyscallId::Kcmp,
        SyscallId::FinitModule,
        SyscallId::SchedSetattr,
        SyscallId::SchedGetattr,
        SyscallId::Renameat2,
        SyscallId::Seccomp,
        SyscallId::Getrandom,
        SyscallId::MemfdCreate,
        SyscallId::KexecFileLoad,
        SyscallId::Bpf,
        SyscallId::Execveat,
        SyscallId::Userfaultfd,
        SyscallId::Membarrier,
        SyscallId::Mlock2,
        SyscallId::CopyFileRange,
        SyscallId::Preadv2,
        SyscallId::Pwritev2,
        SyscallId::PkeyMprotect,
        SyscallId::PkeyAlloc,
        SyscallId::PkeyFree,
        SyscallId::Statx,
        SyscallId::Oldstat,
        SyscallId::Oldfstat,
        SyscallId::Oldlstat,
        SyscallId::Stat64,
        SyscallId::Fstat64,
        SyscallId::Lstat64,
        SyscallId::Fstatat64,
        SyscallId::Mmap2,
        SyscallId::Waitpid,
    ];
}

impl SyscallId {
    /// Lowercase syscall name, as used in Linux source and `strace` output.
    pub fn name(self) -> &'static str {
        match self {
            SyscallId::None => "none",
            SyscallId::Read => "read",
            SyscallId::Write => "write",
            SyscallId::Open => "open",
            SyscallId::Close => "close",
            SyscallId::Stat => "stat",
            SyscallId::Fstat => "fstat",
            SyscallId::Lstat => "lstat",
            SyscallId::Poll => "poll",
            SyscallId::Lseek => "lseek",
            SyscallId::Mmap => "mmap",
            SyscallId::Mprotect => "mprotect",
            SyscallId::Munmap => "munmap",
            SyscallId::Brk => "brk",
            SyscallId::RtSigaction => "rt_sigaction",
            SyscallId::RtSigprocmask => "rt_sigprocmask",
            SyscallId::RtSigreturn => "rt_sigreturn",
            SyscallId::Ioctl => "ioctl",
            SyscallId::Pread64 => "pread64",
            SyscallId::Pwrite64 => "pwrite64",
            SyscallId::Readv => "readv",
            SyscallId::Writev => "writev",
            SyscallId::Access => "access",
            SyscallId::Pipe => "pipe",
            SyscallId::Select => "select",
            SyscallId::SchedYield => "sched_yield",
            SyscallId::Mremap => "mremap",
            SyscallId::Msync => "msync",
            SyscallId::Mincore => "mincore",
            SyscallId::Madvise => "madvise",
            SyscallId::Shmget => "shmget",
            SyscallId::Shmat => "shmat",
            SyscallId::Shmctl => "shmctl",
            SyscallId::Dup => "dup",
            SyscallId::Dup2 => "dup2",
            SyscallId::Pause => "pause",
            SyscallId::Nanosleep => "nanosleep",
            SyscallId::Getitimer => "getitimer",
            SyscallId::Alarm => "alarm",
            SyscallId::Setitimer => "setitimer",
            SyscallId::Getpid => "getpid",
            SyscallId::Sendfile => "sendfile",
            SyscallId::Socket => "socket",
            SyscallId::Connect => "connect",
            SyscallId::Accept => "accept",
            SyscallId::Sendto => "sendto",
            SyscallId::Recvfrom => "recvfrom",
            SyscallId::Sendmsg => "sendmsg",
            SyscallId::Recvmsg => "recvmsg",
            SyscallId::Shutdown => "shutdown",
            SyscallId::Bind => "bind",
            SyscallId::Listen => "listen",
            SyscallId::Getsockname => "getsockname",
            SyscallId::Getpeername => "getpeername",
            SyscallId::Socketpair => "socketpair",
            SyscallId::Setsockopt => "setsockopt",
            SyscallId::Getsockopt => "getsockopt",
            SyscallId::Clone => "clone",
            SyscallId::Fork => "fork",
            SyscallId::Vfork => "vfork",
            SyscallId::Execve => "execve",
            SyscallId::Exit => "exit",
            SyscallId::Wait4 => "wait4",
            SyscallId::Kill => "kill",
            SyscallId::Uname => "uname",
            SyscallId::Semget => "semget",
            SyscallId::Semop => "semop",
            SyscallId::Semctl => "semctl",
            SyscallId::Shmdt => "shmdt",
            SyscallId::Msgget => "msgget",
            SyscallId::Msgsnd => "msgsnd",
            SyscallId::Msgrcv => "msgrcv",
            SyscallId::Msgctl => "msgctl",
            SyscallId::Fcntl => "fcntl",
            SyscallId::Flock => "flock",
            SyscallId::Fsync => "fsync",
            SyscallId::Fdatasync => "fdatasync",
            SyscallId::Truncate => "truncate",
            SyscallId::Ftruncate => "ftruncate",
            SyscallId::Getdents => "getdents",
            SyscallId::Getcwd => "getcwd",
            SyscallId::Chdir => "chdir",
            SyscallId::Fchdir => "fchdir",
            SyscallId::Rename => "rename",
            SyscallId::Mkdir => "mkdir",
            SyscallId::Rmdir => "rmdir",
            SyscallId::Creat => "creat",
            SyscallId::Link => "link",
            SyscallId::Unlink => "unlink",
            SyscallId::Symlink => "symlink",
            SyscallId::Readlink => "readlink",
            SyscallId::Chmod => "chmod",
            SyscallId::Fchmod => "fchmod",
            SyscallId::Chown => "chown",
            SyscallId::Fchown => "fchown",
            SyscallId::Lchown => "lchown",
            SyscallId::Umask => "umask",
            SyscallId::Gettimeofday => "gettimeofday",
            SyscallId::Getrlimit => "getrlimit",
            SyscallId::Getrusage => "getrusage",
            SyscallId::Sysinfo => "sysinfo",
            SyscallId::Times => "times",
            SyscallId::Ptrace => "ptrace",
            SyscallId::Getuid => "getuid",
            SyscallId::Syslog => "syslog",
            SyscallId::Getgid => "getgid",
            SyscallId::Setuid => "setuid",
            SyscallId::Setgid => "setgid",
            SyscallId::Geteuid => "geteuid",
            SyscallId::Getegid => "getegid",
            SyscallId::Setpgid => "setpgid",
            SyscallId::Getppid => "getppid",
            SyscallId::Getpgrp => "getpgrp",
            SyscallId::Setsid => "setsid",
            SyscallId::Setreuid => "setreuid",
            SyscallId::Setregid => "setregid",
            SyscallId::Getgroups => "getgroups",
            SyscallId::Setgroups => "setgroups",
            SyscallId::Setresuid => "setresuid",
            SyscallId::Getresuid => "getresuid",
            SyscallId::Setresgid => "setresgid",
            SyscallId::Getresgid => "getresgid",
            SyscallId::Getpgid => "getpgid",
            SyscallId::Setfsuid => "setfsuid",
            SyscallId::Setfsgid => "setfsgid",
            SyscallId::Getsid => "getsid",
            SyscallId::Capget => "capget",
            SyscallId::Capset => "capset",
            SyscallId::RtSigpending => "rt_sigpending",
            SyscallId::RtSigtimedwait => "rt_sigtimedwait",
            SyscallId::RtSigqueueinfo => "rt_sigqueueinfo",
            SyscallId::RtSigsuspend => "rt_sigsuspend",
            SyscallId::Sigaltstack => "sigaltstack",
            SyscallId::Utime => "utime",
            SyscallId::Mknod => "mknod",
            SyscallId::Uselib => "uselib",
            SyscallId::Personality => "personality",
            SyscallId::Ustat => "ustat",
            SyscallId::Statfs => "statfs",
            SyscallId::Fstatfs => "fstatfs",
            SyscallId::Sysfs => "sysfs",
            SyscallId::Getpriority => "getpriority",
            SyscallId::Setpriority => "setpriority",
            SyscallId::SchedSetparam => "sched_setparam",
            SyscallId::SchedGetparam => "sched_getparam",
            SyscallId::SchedSetscheduler => "sched_setscheduler",
            SyscallId::SchedGetscheduler => "sched_getscheduler",
            SyscallId::SchedGetPriorityMax => "sched_get_priority_max",
            SyscallId::SchedGetPriorityMin => "sched_get_priority_min",
            SyscallId::SchedRrGetInterval => "sched_rr_get_interval",
            SyscallId::Mlock => "mlock",
            SyscallId::Munlock => "munlock",
            SyscallId::Mlockall => "mlockall",
            SyscallId::Munlockall => "munlockall",
            SyscallId::Vhangup => "vhangup",
            SyscallId::ModifyLdt => "modify_ldt",
            SyscallId::PivotRoot => "pivot_root",
            SyscallId::Sysctl => "_sysctl",
            SyscallId::Prctl => "prctl",
            SyscallId::ArchPrctl => "arch_prctl",
            SyscallId::Adjtimex => "adjtimex",
            SyscallId::Setrlimit => "setrlimit",
            SyscallId::Chroot => "chroot",
            SyscallId::Sync => "sync",
            SyscallId::Acct => "acct",
            SyscallId::Settimeofday => "settimeofday",
            SyscallId::Mount => "mount",
            SyscallId::Umount2 => "umount2",
            SyscallId::Swapon => "swapon",
            SyscallId::Swapoff => "swapoff",
            SyscallId::Reboot => "reboot",
            SyscallId::Sethostname => "sethostname",
            SyscallId::Setdomainname => "setdomainname",
            SyscallId::Iopl => "iopl",
            SyscallId::Ioperm => "ioperm",
            SyscallId::CreateModule => "create_module",
            SyscallId::InitModule => "init_module",
            SyscallId::DeleteModule => "delete_module",
            SyscallId::GetKernelSyms => "get_kernel_syms",
            SyscallId::QueryModule => "query_module",
            SyscallId::Quotactl => "quotactl",
            SyscallId::Nfsservctl => "nfsservctl",
            SyscallId::Getpmsg => "getpmsg",
            SyscallId::Putpmsg => "putpmsg",
            SyscallId::AfsSyscall => "afs_syscall",
            SyscallId::Tuxcall => "tuxcall",
            SyscallId::Security => "security",
            SyscallId::Gettid => "gettid",
            SyscallId::Readahead => "readahead",
            SyscallId::Setxattr => "setxattr",
            SyscallId::Lsetxattr => "lsetxattr",
            SyscallId::Fsetxattr => "fsetxattr",
            SyscallId::Getxattr => "getxattr",
            SyscallId::Lgetxattr => "lgetxattr",
            SyscallId::Fgetxattr => "fgetxattr",
            SyscallId::Listxattr => "listxattr",
            SyscallId::Llistxattr => "llistxattr",
            SyscallId::Flistxattr => "flistxattr",
            SyscallId::Removexattr => "removexattr",
            SyscallId::Lremovexattr => "lremovexattr",
            SyscallId::Fremovexattr => "fremovexattr",
            SyscallId::Tkill => "tkill",
            SyscallId::Time => "time",
            SyscallId::Futex => "futex",
            SyscallId::SchedSetaffinity => "sched_setaffinity",
            SyscallId::SchedGetaffinity => "sched_getaffinity",
            SyscallId::SetThreadArea => "set_thread_area",
            SyscallId::IoSetup => "io_setup",
            SyscallId::IoDestroy => "io_destroy",
            SyscallId::IoGetevents => "io_getevents",
            SyscallId::IoSubmit => "io_submit",
            SyscallId::IoCancel => "io_cancel",
            SyscallId::GetThreadArea => "get_thread_area",
            SyscallId::LookupDcookie => "lookup_dcookie",
            SyscallId::EpollCreate => "epoll_create",
            SyscallId::EpollCtlOld => "epoll_ctl_old",
            SyscallId::EpollWaitOld => "epoll_wait_old",
            SyscallId::RemapFilePages => "remap_file_pages",
            SyscallId::Getdents64 => "getdents64",
            SyscallId::SetTidAddress => "set_tid_address",
            SyscallId::RestartSyscall => "restart_syscall",
            SyscallId::Semtimedop => "semtimedop",
            SyscallId::Fadvise64 => "fadvise64",
            SyscallId::TimerCreate => "timer_create",
            SyscallId::TimerSettime => "timer_settime",
            SyscallId::TimerGettime => "timer_gettime",
            SyscallId::TimerGetoverrun => "timer_getoverrun",
            SyscallId::TimerDelete => "timer_delete",
            SyscallId::ClockSettime => "clock_settime",
            SyscallId::ClockGettime => "clock_gettime",
            SyscallId::ClockGetres => "clock_getres",
            SyscallId::ClockNanosleep => "clock_nanosleep",
            SyscallId::ExitGroup => "exit_group",
            SyscallId::EpollWait => "epoll_wait",
            SyscallId::EpollCtl => "epoll_ctl",
            SyscallId::Tgkill => "tgkill",
            SyscallId::Utimes => "utimes",
            SyscallId::Vserver => "vserver",
            SyscallId::Mbind => "mbind",
            SyscallId::SetMempolicy => "set_mempolicy",
            SyscallId::GetMempolicy => "get_mempolicy",
            SyscallId::MqOpen => "mq_open",
            SyscallId::MqUnlink => "mq_unlink",
            SyscallId::MqTimedsend => "mq_timedsend",
            SyscallId::MqTimedreceive => "mq_timedreceive",
            SyscallId::MqNotify => "mq_notify",
            SyscallId::MqGetsetattr => "mq_getsetattr",
            SyscallId::KexecLoad => "kexec_load",
            SyscallId::Waitid => "waitid",
            SyscallId::AddKey => "add_key",
            SyscallId::RequestKey => "request_key",
            SyscallId::Keyctl => "keyctl",
            SyscallId::IoprioSet => "ioprio_set",
            SyscallId::IoprioGet => "ioprio_get",
            SyscallId::InotifyInit => "inotify_init",
            SyscallId::InotifyAddWatch => "inotify_add_watch",
            SyscallId::InotifyRmWatch => "inotify_rm_watch",
            SyscallId::MigratePages => "migrate_pages",
            SyscallId::Openat => "openat",
            SyscallId::Mkdirat => "mkdirat",
            SyscallId::Mknodat => "mknodat",
            SyscallId::Fchownat => "fchownat",
            SyscallId::Futimesat => "futimesat",
            SyscallId::Newfstatat => "newfstatat",
            SyscallId::Unlinkat => "unlinkat",
            SyscallId::Renameat => "renameat",
            SyscallId::Linkat => "linkat",
            SyscallId::Symlinkat => "symlinkat",
            SyscallId::Readlinkat => "readlinkat",
            SyscallId::Fchmodat => "fchmodat",
            SyscallId::Faccessat => "faccessat",
            SyscallId::Pselect6 => "pselect6",
            SyscallId::Ppoll => "ppoll",
            SyscallId::Unshare => "unshare",
            SyscallId::SetRobustList => "set_robust_list",
            SyscallId::GetRobustList => "get_robust_list",
            SyscallId::Splice => "splice",
            SyscallId::Tee => "tee",
            SyscallId::SyncFileRange => "sync_file_range",
            SyscallId::Vmsplice => "vmsplice",
            SyscallId::MovePages => "move_pages",
            SyscallId::Utimensat => "utimensat",
            SyscallId::EpollPwait => "epoll_pwait",
            SyscallId::Signalfd => "signalfd",
            SyscallId::TimerfdCreate => "timerfd_create",
            SyscallId::Eventfd => "eventfd",
            SyscallId::Fallocate => "fallocate",
            SyscallId::TimerfdSettime => "timerfd_settime",
            SyscallId::TimerfdGettime => "timerfd_gettime",
            SyscallId::Accept4 => "accept4",
            SyscallId::Signalfd4 => "signalfd4",
            SyscallId::Eventfd2 => "eventfd2",
            SyscallId::EpollCreate1 => "epoll_create1",
            SyscallId::Dup3 => "dup3",
            SyscallId::Pipe2 => "pipe2",
            SyscallId::InotifyInit1 => "inotify_init1",
            SyscallId::Preadv => "preadv",
            SyscallId::Pwritev => "pwritev",
            SyscallId::RtTgsigqueueinfo => "rt_tgsigqueueinfo",
            SyscallId::PerfEventOpen => "perf_event_open",
            SyscallId::Recvmmsg => "recvmmsg",
            SyscallId::FanotifyInit => "fanotify_init",
            SyscallId::FanotifyMark => "fanotify_mark",
            SyscallId::Prlimit64 => "prlimit64",
            SyscallId::NameToHandleAt => "name_to_handle_at",
            SyscallId::OpenByHandleAt => "open_by_handle_at",
            SyscallId::ClockAdjtime => "clock_adjtime",
            SyscallId::Syncfs => "syncfs",
            SyscallId::Sendmmsg => "sendmmsg",
            SyscallId::Setns => "setns",
            SyscallId::Getcpu => "getcpu",
            SyscallId::ProcessVmReadv => "process_vm_readv",
            SyscallId::ProcessVmWritev => "process_vm_writev",
            SyscallId::Kcmp => "kcmp",
            SyscallId::FinitModule => "finit_module",
            SyscallId::SchedSetattr => "sched_setattr",
            SyscallId::SchedGetattr => "sched_getattr",
            SyscallId::Renameat2 => "renameat2",
            SyscallId::Seccomp => "seccomp",
            SyscallId::Getrandom => "getrandom",
            SyscallId::MemfdCreate => "memfd_create",
            SyscallId::KexecFileLoad => "kexec_file_load",
            SyscallId::Bpf => "bpf",
            SyscallId::Execveat => "execveat",
            SyscallId::Userfaultfd => "userfaultfd",
            SyscallId::Membarrier => "membarrier",
            SyscallId::Mlock2 => "mlock2",
            SyscallId::CopyFileRange => "copy_file_range",
            SyscallId::Preadv2 => "preadv2",
            SyscallId::Pwritev2 => "pwritev2",
            SyscallId::PkeyMprotect => "pkey_mprotect",
            SyscallId::PkeyAlloc => "pkey_alloc",
            SyscallId::PkeyFree => "pkey_free",
            SyscallId::Statx => "statx",
            SyscallId::Oldstat => "oldstat",
            SyscallId::Oldfstat => "oldfstat",
            SyscallId::Oldlstat => "oldlstat",
            SyscallId::Stat64 => "stat64",
            SyscallId::Fstat64 => "fstat64",
            SyscallId::Lstat64 => "lstat64",
            SyscallId::Fstatat64 => "fstatat64",
            SyscallId::Mmap2 => "mmap2",
            SyscallId::Waitpid => "waitpid",
        }
    }
}

mod session_vote;
